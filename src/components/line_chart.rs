//! Minimal SVG line rendering of a dataset.
//!
//! This component is the plotting-collaborator boundary: a [`Dataset`] and
//! its [`Bounds`] go in, an inline SVG comes out. Everything fancier
//! (gradients, crosshairs, slice tooltips) stays behind this seam.

#[cfg(test)]
#[path = "line_chart_test.rs"]
mod line_chart_test;

use leptos::prelude::*;

use charts::{Bounds, Dataset, short_number};

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 240.0;

/// Map dataset points onto `x,y` pairs for an SVG polyline.
///
/// X spreads points evenly across the view box; Y is scaled into the padded
/// display range, inverted because SVG's origin is the top-left corner.
fn polyline_points(dataset: &Dataset, bounds: Bounds) -> String {
    let n = dataset.points.len();
    if n == 0 {
        return String::new();
    }

    let lo = bounds.display_min();
    let hi = bounds.display_max();
    let span = if (hi - lo).abs() < f64::EPSILON {
        1.0
    } else {
        hi - lo
    };

    dataset
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if n == 1 {
                VIEW_W / 2.0
            } else {
                i as f64 / (n - 1) as f64 * VIEW_W
            };
            let y = VIEW_H - (point.value - lo) / span * VIEW_H;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart for one dataset.
#[component]
pub fn LineChart(dataset: Memo<Dataset>, bounds: Memo<Bounds>) -> impl IntoView {
    let points = move || polyline_points(&dataset.get(), bounds.get());
    let tick_top = move || short_number(bounds.get().display_max());
    let tick_bottom = move || short_number(bounds.get().display_min());
    let first_label = move || {
        dataset
            .get()
            .points
            .first()
            .map(|p| p.label.clone())
            .unwrap_or_default()
    };
    let last_label = move || {
        dataset
            .get()
            .points
            .last()
            .map(|p| p.label.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="line-chart">
            <div class="line-chart__ticks">
                <span>{tick_top}</span>
                <span>{tick_bottom}</span>
            </div>
            <svg
                class="line-chart__plot"
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                preserveAspectRatio="none"
            >
                <polyline
                    points=points
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                ></polyline>
            </svg>
            <div class="line-chart__x-labels">
                <span>{first_label}</span>
                <span>{last_label}</span>
            </div>
        </div>
    }
}
