//! Sign-in-required modal
//!
//! Shown when an unauthenticated user attempts a protected action. The
//! caller is responsible for stashing any pending intent (e.g. a deferred
//! provider search) before opening it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::storage;

/// Modal prompting the user to sign in, preserving the current location
/// as the post-login return target
#[component]
pub fn SignInRequiredModal(open: RwSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();

    let go_to_login = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(href) = window.location().href() {
                storage::set_return_url(&href);
            }
        }
        open.set(false);
        navigate("/login", Default::default());
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    class="bg-white rounded-lg shadow-xl w-full max-w-md p-6"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-gray-900">"Sign In Required"</h3>
                        <button
                            on:click=move |_| open.set(false)
                            class="text-gray-400 hover:text-gray-600"
                        >
                            "✕"
                        </button>
                    </div>

                    <p class="text-gray-600 mb-6">
                        "You need to sign in to find and connect with service providers."
                    </p>

                    <div class="flex flex-col space-y-3">
                        <button
                            on:click=go_to_login.clone()
                            class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-3 px-4 rounded-lg transition-colors"
                        >
                            "Sign In"
                        </button>
                        <button
                            on:click=move |_| open.set(false)
                            class="w-full bg-gray-200 hover:bg-gray-300 text-gray-700 font-semibold py-3 px-4 rounded-lg transition-colors"
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
