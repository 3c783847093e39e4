//! FundiLink UI - Leptos frontend for the local-services marketplace
//!
//! Category browsing, AI-assisted problem intake, provider matching with
//! client-side sorting, chat, ratings, dashboards, and the multi-step
//! provider onboarding wizard.

pub mod api;
pub mod catalog;
pub mod components;
pub mod error;
pub mod locations;
pub mod matching;
pub mod pages;
pub mod state;
pub mod storage;
pub mod types;
pub mod validate;
pub mod wizard;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::client_dashboard::ClientDashboardPage;
use pages::home::HomePage;
use pages::login::LoginPage;
use pages::provider_dashboard::ProviderDashboardPage;
use pages::provider_signup::ProviderSignupPage;
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/provider-signup") view=ProviderSignupPage />
                    <Route path=path!("/client-dashboard") view=ClientDashboardPage />
                    <Route path=path!("/provider-dashboard") view=ProviderDashboardPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
