//! Login/Register page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::Header;
use crate::state::AppState;
use crate::storage;
use crate::types::RegisterRequest;
use crate::validate;

/// Where to send the user once authenticated. Stored intent wins over the
/// plain home redirect; a stashed pending search is replayed by the home
/// page itself.
fn post_login_destination() -> String {
    // Both intents are consumed so neither can leak into a later login
    let action = storage::take_post_login_action();
    let return_url = storage::take_return_url();
    if action.as_deref() == Some("provider-signup") {
        return "/provider-signup".to_string();
    }
    if let Some(url) = return_url {
        return url;
    }
    "/".to_string()
}

/// Login/Register page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let is_register = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Already signed in: nothing to do here
    let navigate_for_redirect = navigate.clone();
    let state_for_redirect = state.clone();
    Effect::new(move |_| {
        if state_for_redirect.token.get().is_some() && state_for_redirect.user.get().is_some() {
            navigate_for_redirect("/", Default::default());
        }
    });

    let navigate_for_submit = navigate.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        let name_val = name.get().trim().to_string();
        let phone_val = phone.get().trim().to_string();
        let is_reg = is_register.get();
        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        // Local validation before any network call
        if !validate::is_valid_email(&email_val) {
            error.set(Some("Please enter a valid email address".into()));
            return;
        }
        if is_reg && !phone_val.is_empty() && !validate::is_valid_kenyan_phone(&phone_val) {
            error.set(Some("Please enter a valid Kenyan phone number".into()));
            return;
        }

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base = state.api_base.get_untracked();
            let result = if is_reg {
                let body = RegisterRequest {
                    name: name_val,
                    email: email_val,
                    password: password_val,
                    phone: (!phone_val.is_empty()).then_some(phone_val),
                };
                api::register(&base, &body).await
            } else {
                api::login(&base, &email_val, &password_val).await
            };

            is_loading.set(false);

            match result {
                Ok(auth) => {
                    state.save_auth(&auth);
                    let destination = post_login_destination();
                    if destination.starts_with("http") {
                        // Full URL captured from another page
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&destination);
                        }
                    } else {
                        navigate(&destination, Default::default());
                    }
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />

            <main class="flex-1 flex items-center justify-center">
                <div class="w-full max-w-md px-4">
                    <div class="bg-white py-8 px-6 shadow rounded-lg">
                        <div class="text-center mb-6">
                            <h1 class="text-2xl font-bold text-gray-900">
                                {move || if is_register.get() { "Create Account" } else { "Welcome Back" }}
                            </h1>
                            <p class="text-sm text-gray-500 mt-1">
                                {move || if is_register.get() {
                                    "Sign up to find trusted professionals near you"
                                } else {
                                    "Sign in to continue"
                                }}
                            </p>
                        </div>

                        // Error message
                        <Show when=move || error.get().is_some()>
                            <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-md text-red-700 text-sm">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit class="space-y-4">
                            // Name field (register only)
                            <Show when=move || is_register.get()>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">"Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                        placeholder="Your name"
                                        required=is_register.get()
                                        class="w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">
                                        "Phone (optional)"
                                    </label>
                                    <input
                                        type="tel"
                                        prop:value=move || phone.get()
                                        on:input=move |ev| phone.set(event_target_value(&ev))
                                        placeholder="07XX XXX XXX"
                                        class="w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    />
                                </div>
                            </Show>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="you@example.com"
                                    required=true
                                    class="w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    required=true
                                    minlength="8"
                                    class="w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white font-semibold py-3 rounded-md transition-colors"
                            >
                                {move || if is_register.get() { "Create Account" } else { "Sign In" }}
                            </button>
                        </form>

                        // Toggle login/register
                        <div class="mt-6 text-center text-sm text-gray-600">
                            {move || if is_register.get() {
                                "Already have an account? "
                            } else {
                                "Don't have an account? "
                            }}
                            <button
                                on:click=move |_| {
                                    is_register.update(|v| *v = !*v);
                                    error.set(None);
                                }
                                class="text-indigo-600 hover:text-indigo-800 font-medium"
                            >
                                {move || if is_register.get() { "Sign in" } else { "Sign up" }}
                            </button>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
