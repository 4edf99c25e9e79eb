//! Modal dialog for creating a discussion topic.

use leptos::prelude::*;

use forms::field::Field;
use forms::form::Form;
use forms::submit::{Phase, Submission};

use crate::i18n::t;
#[cfg(feature = "hydrate")]
use crate::i18n::t_with;
use crate::net::api::{Topic, TopicDraft};
#[cfg(feature = "hydrate")]
use crate::net::error::TopicCreateError;
use crate::state::toasts::ToastsState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::ToastColor;

fn topic_form() -> Form {
    Form::new(vec![
        Field::required("name", "topics.modals.create.validation.name"),
        Field::required("description", "topics.modals.create.validation.description"),
        Field::required("link", "topics.modals.create.validation.link"),
    ])
}

/// Topic creation dialog.
///
/// On success the form resets, the dialog switches to its created panel,
/// a success toast appears, and the topic list resource is refetched so
/// the new topic shows up behind the modal.
#[component]
pub fn TopicCreateModal(
    /// Whether the dialog is shown; the dialog closes itself through this.
    opened: RwSignal<bool>,
    /// Topic list to refetch after a successful creation.
    topics: LocalResource<Vec<Topic>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let form = RwSignal::new(topic_form());
    let submission = RwSignal::new(Submission::new());

    let locked = move || submission.with(Submission::is_locked);
    let sent = move || submission.with(|s| s.phase() == Phase::Done);

    let do_submit = move || {
        if submission.with(|s| s.phase() != Phase::Editing) {
            return;
        }

        let mut draft = None;
        form.update(|f| {
            f.submit(|values| {
                draft = Some(TopicDraft {
                    name: values.get_or_empty("name").to_owned(),
                    description: values.get_or_empty("description").to_owned(),
                    link: values.get_or_empty("link").to_owned(),
                });
            });
        });
        let Some(draft) = draft else {
            return;
        };

        let mut started = false;
        submission.update(|s| started = s.begin());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_topic(&draft).await {
                Ok(topic) => {
                    form.update(Form::reset);
                    submission.update(Submission::finish_success);
                    toasts.update(|q| {
                        q.show(
                            ToastColor::Green,
                            t("topics.modals.create.notifications.success.title"),
                            t_with(
                                "topics.modals.create.notifications.success.message",
                                &[("name", &topic.name)],
                            ),
                        );
                    });
                    topics.refetch();
                }
                Err(error) => {
                    submission.update(Submission::finish_failure);
                    let code = TopicCreateError::classify(&error);
                    toasts.update(|q| {
                        q.show(
                            ToastColor::Red,
                            t("topics.modals.create.notifications.addTitle"),
                            t(code.message_key()),
                        );
                    });
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            let _ = &toasts;
            let _ = &topics;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let value_of = move |name: &'static str| move || form.with(|f| f.value(name).to_owned());
    let error_of = move |name: &'static str| move || form.with(|f| f.error(name).map(t));

    view! {
        <div class="dialog-backdrop" on:click=move |_| opened.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{t("topics.modals.create.title")}</h2>

                <Show when=sent>
                    <div class="dialog__done">
                        <svg class="dialog__check" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M4 13l5 5 11-12"></path>
                        </svg>
                        <p class="dialog__done-title">{t("topics.modals.create.created.title")}</p>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| submission.update(Submission::start_over)
                        >
                            {t("topics.modals.create.created.createMore")}
                        </button>
                    </div>
                </Show>

                <Show when=move || !sent()>
                    <form class="dialog__form" on:submit=on_submit>
                        <Show when=locked>
                            <div class="dialog__overlay"></div>
                        </Show>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("topics.modals.create.inputs.name.label")}
                            </span>
                            <input
                                class="form-field__input"
                                type="text"
                                placeholder=t("topics.modals.create.inputs.name.placeholder")
                                prop:value=value_of("name")
                                disabled=locked
                                on:input=move |ev| {
                                    form.update(|f| f.set_value("name", &event_target_value(&ev)));
                                }
                            />
                            {move || {
                                error_of("name")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("topics.modals.create.inputs.description.label")}
                            </span>
                            <textarea
                                class="form-field__input"
                                placeholder=t("topics.modals.create.inputs.description.placeholder")
                                prop:value=value_of("description")
                                disabled=locked
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.set_value("description", &event_target_value(&ev));
                                    });
                                }
                            ></textarea>
                            {move || {
                                error_of("description")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("topics.modals.create.inputs.link.label")}
                            </span>
                            <input
                                class="form-field__input"
                                type="text"
                                placeholder=t("topics.modals.create.inputs.link.placeholder")
                                title=t("topics.modals.create.inputs.link.help")
                                prop:value=value_of("link")
                                disabled=locked
                                on:input=move |ev| {
                                    form.update(|f| f.set_value("link", &event_target_value(&ev)));
                                }
                            />
                            {move || {
                                error_of("link")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <button class="btn btn--primary" type="submit" disabled=locked>
                            {t("topics.modals.create.inputs.button")}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
