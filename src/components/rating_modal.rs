//! Provider rating modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::types::ReviewRequest;

/// Star rating submission for one provider. Submit stays disabled until a
/// star value is chosen; comments are optional.
#[component]
pub fn RatingModal(
    open: RwSignal<bool>,
    /// `(provider_id, provider_name)` being rated
    provider: RwSignal<Option<(i64, String)>>,
    /// Invoked after a successful submission (e.g. to refresh results)
    on_submitted: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);

    let close = move || {
        open.set(false);
        provider.set(None);
        rating.set(0);
        comment.set(String::new());
    };

    let submit = {
        let state = state.clone();
        move |_| {
            let stars = rating.get_untracked();
            if stars == 0 || is_submitting.get_untracked() {
                return;
            }
            let Some((provider_id, _)) = provider.get_untracked() else {
                return;
            };

            let state = state.clone();
            spawn_local(async move {
                is_submitting.set(true);
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked();
                let trimmed = comment.get_untracked().trim().to_string();
                let body = ReviewRequest {
                    provider_id,
                    rating: stars,
                    comment: (!trimmed.is_empty()).then_some(trimmed),
                };
                match api::submit_review(&base, token.as_deref(), &body).await {
                    Ok(()) => {
                        state.toast_success("Thank you for your rating!");
                        open.set(false);
                        provider.set(None);
                        rating.set(0);
                        comment.set(String::new());
                        on_submitted.run(());
                    }
                    Err(err) => state.toast_error(err.user_message()),
                }
                is_submitting.set(false);
            });
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg shadow-xl w-full max-w-md p-6">
                    <h3 class="text-lg font-semibold mb-4">
                        {move || {
                            provider
                                .get()
                                .map(|(_, name)| format!("Rate {name}"))
                                .unwrap_or_else(|| "Rate provider".to_string())
                        }}
                    </h3>

                    <p class="text-sm text-gray-600 mb-2">
                        "How would you rate this service provider?"
                    </p>
                    <div class="flex space-x-1 mb-2">
                        {(1u8..=5)
                            .map(|star| {
                                view! {
                                    <button
                                        on:click=move |_| rating.set(star)
                                        class=move || format!(
                                            "text-2xl {}",
                                            if rating.get() >= star {
                                                "text-yellow-400"
                                            } else {
                                                "text-gray-300 hover:text-yellow-400"
                                            }
                                        )
                                    >
                                        "★"
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="text-sm text-gray-500 mb-4">
                        {move || {
                            match rating.get() {
                                0 => "Select a rating".to_string(),
                                1 => "1 star".to_string(),
                                n => format!("{n} stars"),
                            }
                        }}
                    </div>

                    <label class="block text-sm font-medium text-gray-700 mb-2">
                        "Comments (optional)"
                    </label>
                    <textarea
                        rows="3"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                        placeholder="Share your experience with this provider..."
                        class="w-full border border-gray-300 rounded-md px-3 py-2 mb-4 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    ></textarea>

                    <div class="flex space-x-3">
                        <button
                            on:click=move |_| close()
                            class="flex-1 bg-gray-300 hover:bg-gray-400 text-gray-700 py-2 px-4 rounded-md"
                        >
                            "Cancel"
                        </button>
                        <button
                            on:click=submit.clone()
                            disabled=move || rating.get() == 0 || is_submitting.get()
                            class="flex-1 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 disabled:cursor-not-allowed text-white py-2 px-4 rounded-md"
                        >
                            "Submit Rating"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
