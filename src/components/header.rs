//! Header component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::AppState;
use crate::types::UserType;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_auth = Signal::derive({
        let state = state.clone();
        move || state.token.get().is_some() && state.user.get().is_some()
    });

    let dashboard_href = {
        let state = state.clone();
        move || match state.user.get().map(|u| u.user_type) {
            Some(UserType::Provider) => "/provider-dashboard",
            _ => "/client-dashboard",
        }
    };

    let dashboard_label = {
        let state = state.clone();
        move || match state.user.get().map(|u| u.user_type) {
            Some(UserType::Provider) => "Provider Dashboard",
            _ => "My Dashboard",
        }
    };

    view! {
        <header class="header h-16 sticky top-0 z-40 bg-white border-b border-gray-200">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/" class="logo flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="text-2xl">"🔧"</span>
                    <div>
                        <h1 class="text-xl font-bold text-indigo-600">"FundiLink"</h1>
                        <p class="text-xs text-gray-500 -mt-0.5">"Trusted local professionals"</p>
                    </div>
                </a>

                // Navigation
                <nav class="flex items-center gap-2">
                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            let name = state
                                .user
                                .get()
                                .map(|u| u.name)
                                .unwrap_or_default();
                            view! {
                                <a href=dashboard_href.clone() class="btn btn-ghost">
                                    {dashboard_label.clone()}
                                </a>
                                <span class="text-sm text-gray-700 hidden sm:inline">
                                    {format!("Welcome, {name}")}
                                </span>
                                <button
                                    on:click=move |_| {
                                        state.clear_auth();
                                        navigate("/", Default::default());
                                    }
                                    class="btn bg-red-500 hover:bg-red-600 text-white"
                                >
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <a href="/login" class="btn btn-primary">
                                    "Sign In"
                                </a>
                            }
                                .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
