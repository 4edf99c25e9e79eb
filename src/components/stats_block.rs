//! One statistics chart panel: range/step controls, query, chart.

use leptos::prelude::*;

use charts::{Metric, Range, SortOrder, StatsQuery, Step, format_value};

use crate::components::line_chart::LineChart;
use crate::i18n::t;

/// Chart panel for a single metric of one channel.
///
/// Changing the range or step re-issues the stats query; the resource keyed
/// on those selections makes the freshest response win and drops superseded
/// ones. The dataset and bounds are memoized on the same inputs.
#[component]
pub fn StatsBlock(
    /// Channel whose statistics are shown.
    channel_id: String,
    /// Which statistic this panel charts.
    metric: Metric,
    /// Forced lower axis bound.
    #[prop(optional)]
    min: Option<f64>,
    /// Forced upper axis bound.
    #[prop(optional)]
    max: Option<f64>,
    /// Parse values as decimals instead of integers.
    #[prop(optional)]
    float: bool,
    /// Append a percent sign to displayed values.
    #[prop(optional)]
    percent: bool,
) -> impl IntoView {
    let range = RwSignal::new(Range::default());
    let step = RwSignal::new(Step::default());

    let stats = LocalResource::new(move || {
        let query = StatsQuery {
            channel_id: channel_id.clone(),
            metric,
            range: range.get(),
            step: step.get(),
            order: SortOrder::Asc,
        };
        crate::net::api::fetch_channel_stats(query)
    });

    let dataset = Memo::new(move |_| {
        let samples = stats.get().unwrap_or_default();
        charts::build_dataset(metric.key(), &samples, step.get())
    });
    let bounds = Memo::new(move |_| dataset.get().bounds(min, max));

    let loading = move || stats.get().is_none();
    let is_empty = move || dataset.with(|d| d.points.is_empty());
    let latest = move || {
        dataset.with(|d| {
            d.points
                .last()
                .map(|p| format!("{} {}", format_value(p.value, float, percent), tooltip(metric)))
        })
    };

    view! {
        <section class="stats-block">
            <Show when=loading>
                <div class="stats-block__overlay"></div>
            </Show>
            <h2 class="stats-block__title">{t(&block_key(metric, "title"))}</h2>
            <div class="stats-block__controls">
                <div class="segmented" title=t("stats.charts.rangeTitle")>
                    {Range::VALUES
                        .iter()
                        .map(|r| {
                            let r = *r;
                            view! {
                                <button
                                    class="segmented__option"
                                    class:segmented__option--active=move || range.get() == r
                                    on:click=move |_| range.set(r)
                                >
                                    {t(&format!("stats.charts.range.{}", r.as_str()))}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="segmented" title=t("stats.charts.stepTitle")>
                    {Step::VALUES
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! {
                                <button
                                    class="segmented__option"
                                    class:segmented__option--active=move || step.get() == s
                                    on:click=move |_| step.set(s)
                                >
                                    {t(&format!("stats.charts.step.{}", s.as_str()))}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <LineChart dataset=dataset bounds=bounds/>
            {move || {
                if is_empty() && !loading() {
                    view! { <p class="stats-block__empty">{t("stats.charts.empty")}</p> }.into_any()
                } else {
                    view! { <p class="stats-block__latest">{latest()}</p> }.into_any()
                }
            }}
            <p class="stats-block__about">{t(&block_key(metric, "about"))}</p>
        </section>
    }
}

fn block_key(metric: Metric, part: &str) -> String {
    format!("stats.blocks.{}.{}", metric.key(), part)
}

fn tooltip(metric: Metric) -> String {
    t(&block_key(metric, "tooltip"))
}
