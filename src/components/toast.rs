//! Toast notification host

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::{AppState, ToastKind};

const AUTO_HIDE_MS: u32 = 5_000;

/// Renders the active toast at the screen edge and auto-dismisses it
#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Each new toast restarts the dismiss timer; the previous timer is
    // dropped (and thereby cancelled) when the effect re-runs
    let state_for_timer = state.clone();
    Effect::new(move |_| {
        state_for_timer.toast.track();
        if state_for_timer.toast.get_untracked().is_none() {
            return None;
        }
        let toast_signal = state_for_timer.toast;
        Some(Timeout::new(AUTO_HIDE_MS, move || {
            toast_signal.set(None);
        }))
    });

    view! {
        {move || {
            state.toast.get().map(|toast| {
                let (bg, icon) = match toast.kind {
                    ToastKind::Success => ("bg-green-500", "✓"),
                    ToastKind::Error => ("bg-red-500", "!"),
                    ToastKind::Warning => ("bg-orange-500", "⚠"),
                    ToastKind::Info => ("bg-blue-500", "i"),
                };
                let dismiss = state.toast;
                view! {
                    <div class=format!(
                        "fixed top-4 left-1/2 transform -translate-x-1/2 {bg} text-white \
                         px-6 py-3 rounded-lg shadow-lg z-50 max-w-md"
                    )>
                        <div class="flex items-start gap-3">
                            <span class="font-bold">{icon}</span>
                            <p class="text-sm whitespace-pre-line flex-1">{toast.text.clone()}</p>
                            <button
                                on:click=move |_| dismiss.set(None)
                                class="text-white/80 hover:text-white"
                            >
                                "✕"
                            </button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
