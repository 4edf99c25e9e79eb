//! Channel statistics page: one chart panel per metric.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use charts::Metric;

use crate::components::stats_block::StatsBlock;
use crate::i18n::t;

/// Statistics page for one channel, read from the `/channel/:id` route.
#[component]
pub fn ChannelPage() -> impl IntoView {
    let params = use_params_map();
    let channel_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="channel-page">
            <h1 class="channel-page__title">{t("stats.pageTitle")}</h1>
            <div class="channel-page__grid">
                {move || {
                    let id = channel_id();
                    view! {
                        <StatsBlock channel_id=id.clone() metric=Metric::Subscribers/>
                        <StatsBlock channel_id=id.clone() metric=Metric::Views/>
                        <StatsBlock channel_id=id.clone() metric=Metric::TotalViews/>
                        <StatsBlock
                            channel_id=id.clone()
                            metric=Metric::EngagementRate
                            max=100.0
                            float=true
                            percent=true
                        />
                        <StatsBlock channel_id=id.clone() metric=Metric::Posts/>
                        <StatsBlock
                            channel_id=id
                            metric=Metric::Involvement
                            float=true
                            percent=true
                        />
                    }
                }}
            </div>
        </div>
    }
}
