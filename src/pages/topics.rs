//! Discussion topics page: list plus create-topic modal.

use leptos::prelude::*;

use crate::components::topic_create_modal::TopicCreateModal;
use crate::i18n::t;

/// Topics page — lists every topic and hosts the creation modal.
#[component]
pub fn TopicsPage() -> impl IntoView {
    let topics = LocalResource::new(|| crate::net::api::fetch_topics());
    let show_create = RwSignal::new(false);

    view! {
        <div class="topics-page">
            <header class="topics-page__header">
                <h1>{t("topics.title")}</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    {t("topics.create")}
                </button>
            </header>

            <Suspense fallback=move || view! { <p class="topics-page__loading">"Loading..."</p> }>
                {move || {
                    topics
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="topics-page__empty">{t("topics.empty")}</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="topics-page__list">
                                        {list
                                            .into_iter()
                                            .map(|topic| {
                                                view! {
                                                    <article class="topic-card">
                                                        <h2 class="topic-card__name">{topic.name}</h2>
                                                        <p class="topic-card__description">
                                                            {topic.description}
                                                        </p>
                                                        <span class="topic-card__link">{topic.link}</span>
                                                    </article>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <TopicCreateModal opened=show_create topics=topics/>
            </Show>
        </div>
    }
}
