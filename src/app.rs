//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::i18n::t;
use crate::pages::{add_channel::AddChannelPage, channel::ChannelPage, topics::TopicsPage};
use crate::state::toasts::ToastsState;

/// Root application component.
///
/// Provides the shared toast queue and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastsState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/channelboard.css"/>
        <Title text="Channelboard"/>

        <Router>
            <nav class="top-nav">
                <a class="top-nav__brand" href="/">
                    {t("common.appName")}
                </a>
                <a class="top-nav__link" href="/">
                    {t("nav.addChannel")}
                </a>
                <a class="top-nav__link" href="/topics">
                    {t("nav.topics")}
                </a>
            </nav>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=AddChannelPage/>
                    <Route path=StaticSegment("topics") view=TopicsPage/>
                    <Route path=(StaticSegment("channel"), ParamSegment("id")) view=ChannelPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
