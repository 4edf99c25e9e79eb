//! Renders the toast queue and handles timed dismissal.

use leptos::prelude::*;

use crate::state::toasts::{ToastColor, ToastsState};

/// Fixed-position host rendering every visible toast.
///
/// Toasts auto-dismiss after a few seconds in browser builds and can always
/// be dismissed through their close button.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    // Schedule one timed dismissal per toast id, tracked by a watermark so
    // re-runs never double-schedule.
    #[cfg(feature = "hydrate")]
    {
        let scheduled = RwSignal::new(0_u64);
        Effect::new(move || {
            let latest = toasts.with(|t| t.latest_id());
            let from = scheduled.get_untracked();
            if latest <= from {
                return;
            }
            scheduled.set(latest);
            for id in (from + 1)..=latest {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(6)).await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .items
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let color_class = match toast.color {
                            ToastColor::Green => "toast toast--green",
                            ToastColor::Red => "toast toast--red",
                        };
                        let title = toast.title.clone();
                        let message = toast.message.clone();
                        view! {
                            <div class=color_class>
                                <div class="toast__body">
                                    <strong class="toast__title">{title}</strong>
                                    <span class="toast__message">{message}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
