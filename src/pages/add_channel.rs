//! Channel registration page.

use leptos::prelude::*;

use forms::field::Field;
use forms::form::Form;
use forms::submit::{Phase, Submission};

use crate::data;
use crate::i18n::t;
use crate::net::api::ChannelDraft;
#[cfg(feature = "hydrate")]
use crate::net::error::ChannelCreateError;
use crate::state::toasts::ToastsState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::ToastColor;

fn channel_form() -> Form {
    Form::new(vec![
        Field::required("username", "add.channel.validation.username"),
        Field::required("geo", "add.channel.validation.geo"),
        Field::required("language", "add.channel.validation.language"),
        Field::required("category", "add.channel.validation.category"),
    ])
}

/// Channel registration page: one text input, three selects, one submit.
///
/// While a submission is in flight the inputs are overlaid and disabled but
/// keep their values, so a rejected draft comes back editable as typed.
/// After a success the panel switches to its done state until the user asks
/// to add another channel.
#[component]
pub fn AddChannelPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let form = RwSignal::new(channel_form());
    let submission = RwSignal::new(Submission::new());

    let categories = LocalResource::new(|| crate::net::api::fetch_categories());

    let locked = move || submission.with(Submission::is_locked);
    let done = move || submission.with(|s| s.phase() == Phase::Done);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.with(|s| s.phase() != Phase::Editing) {
            return;
        }

        let mut draft = None;
        form.update(|f| {
            f.submit(|values| {
                draft = Some(ChannelDraft {
                    username: values.get_or_empty("username").to_owned(),
                    geo: values.get_or_empty("geo").to_owned(),
                    language: values.get_or_empty("language").to_owned(),
                    category: values.get_or_empty("category").to_owned(),
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
            match crate::net::api::create_channel(&draft).await {
                Ok(_) => {
                    form.update(Form::reset);
                    submission.update(Submission::finish_success);
                }
                Err(error) => {
                    submission.update(Submission::finish_failure);
                    let code = ChannelCreateError::classify(&error);
                    toasts.update(|q| {
                        q.show(
                            ToastColor::Red,
                            t("add.channel.errors.title"),
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
        }
    };

    let username_value = move || form.with(|f| f.value("username").to_owned());
    let select_value = move |name: &'static str| move || form.with(|f| f.value(name).to_owned());
    let error_of = move |name: &'static str| move || form.with(|f| f.error(name).map(t));

    view! {
        <div class="add-page">
            <h1 class="add-page__title">{t("add.channel.title")}</h1>
            <p class="add-page__subtitle">{t("add.channel.subTitle")}</p>

            <section class="panel">
                <Show when=done>
                    <div class="panel__done">
                        <svg class="panel__check" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M4 13l5 5 11-12"></path>
                        </svg>
                        <p class="panel__done-message">{t("add.channel.done.message")}</p>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| submission.update(Submission::start_over)
                        >
                            {t("add.channel.done.addMore")}
                        </button>
                    </div>
                </Show>

                <Show when=move || !done()>
                    <form class="panel__form" on:submit=on_submit>
                        <Show when=locked>
                            <div class="panel__overlay"></div>
                        </Show>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("add.channel.inputs.username.label")}
                            </span>
                            <input
                                class="form-field__input"
                                type="text"
                                placeholder=t("add.channel.inputs.username.placeholder")
                                prop:value=username_value
                                disabled=locked
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.set_value("username", &event_target_value(&ev));
                                    });
                                }
                            />
                            {move || {
                                error_of("username")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <label class="form-field">
                            <span class="form-field__label">{t("add.channel.inputs.geo.label")}</span>
                            <select
                                class="form-field__input"
                                prop:value=select_value("geo")
                                disabled=locked
                                on:change=move |ev| {
                                    form.update(|f| f.set_value("geo", &event_target_value(&ev)));
                                }
                            >
                                <option value="">{t("add.channel.inputs.geo.placeholder")}</option>
                                {data::GEO
                                    .iter()
                                    .map(|code| {
                                        view! {
                                            <option value=*code>
                                                {t(&format!("common.geo.{code}"))}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            {move || {
                                error_of("geo")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("add.channel.inputs.language.label")}
                            </span>
                            <select
                                class="form-field__input"
                                prop:value=select_value("language")
                                disabled=locked
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.set_value("language", &event_target_value(&ev));
                                    });
                                }
                            >
                                <option value="">{t("add.channel.inputs.language.placeholder")}</option>
                                {data::LANGUAGES
                                    .iter()
                                    .map(|code| {
                                        view! {
                                            <option value=*code>
                                                {t(&format!("common.languages.{code}"))}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            {move || {
                                error_of("language")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <label class="form-field">
                            <span class="form-field__label">
                                {t("add.channel.inputs.category.label")}
                            </span>
                            <select
                                class="form-field__input"
                                prop:value=select_value("category")
                                disabled=locked
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.set_value("category", &event_target_value(&ev));
                                    });
                                }
                            >
                                <option value="">{t("add.channel.inputs.category.placeholder")}</option>
                                {move || {
                                    categories
                                        .get()
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|category| {
                                            let label = t(
                                                &format!("common.categories.{}", category.name),
                                            );
                                            view! { <option value=category.link>{label}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            {move || {
                                error_of("category")()
                                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
                            }}
                        </label>

                        <button class="btn btn--primary" type="submit" disabled=locked>
                            {t("add.channel.send")}
                        </button>
                    </form>
                </Show>
            </section>
        </div>
    }
}
