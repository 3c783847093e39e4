//! Provider dashboard: incoming requests, conversations, stats, plus
//! profile and offered-services editing

use futures::join;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::catalog;
use crate::components::{ChatModal, Header, ToastHost};
use crate::state::AppState;
use crate::storage;
use crate::types::{
    ConversationSummary, ProviderProfile, ProviderServices, ProviderStats, ServiceRequestSummary,
    UserType,
};

const POLL_INTERVAL_MS: u32 = 30_000;

async fn load_dashboard(
    state: AppState,
    stats: RwSignal<ProviderStats>,
    requests: RwSignal<Vec<ServiceRequestSummary>>,
    conversations: RwSignal<Vec<ConversationSummary>>,
) {
    let base = state.api_base.get_untracked();
    let token = state.token.get_untracked();
    let token = token.as_deref();

    let (stats_res, requests_res, conversations_res) = join!(
        api::provider_stats(&base, token),
        api::provider_requests(&base, token),
        api::provider_conversations(&base, token),
    );

    match stats_res {
        Ok(value) => stats.set(value),
        Err(err) => tracing::warn!("provider stats fetch failed: {err:?}"),
    }
    match requests_res {
        Ok(value) => requests.set(value),
        Err(err) => tracing::warn!("provider requests fetch failed: {err:?}"),
    }
    match conversations_res {
        Ok(value) => conversations.set(value),
        Err(err) => tracing::warn!("provider conversations fetch failed: {err:?}"),
    }
}

/// Provider dashboard page
#[component]
pub fn ProviderDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let stats = RwSignal::new(ProviderStats::default());
    let requests = RwSignal::new(Vec::<ServiceRequestSummary>::new());
    let conversations = RwSignal::new(Vec::<ConversationSummary>::new());
    let chat_open = RwSignal::new(false);
    let chat_counterpart = RwSignal::new(Option::<(i64, String)>::None);

    // Signed-in providers only
    let state_for_guard = state.clone();
    Effect::new(move |_| {
        if state_for_guard.token.get().is_none() || state_for_guard.user.get().is_none() {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    storage::set_return_url(&href);
                }
            }
            navigate("/login", Default::default());
        }
    });

    let is_provider = Signal::derive({
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .map(|u| u.user_type == UserType::Provider)
                .unwrap_or(false)
        }
    });

    let state_for_load = state.clone();
    let load = move || {
        let state = state_for_load.clone();
        spawn_local(async move {
            load_dashboard(state, stats, requests, conversations).await;
        });
    };

    load();
    let load_for_timer = load.clone();
    let _poll = StoredValue::new_local(Interval::new(POLL_INTERVAL_MS, move || load_for_timer()));

    let state_for_accept = state.clone();
    let load_for_accept = load.clone();
    let accept = move |id: i64| {
        let state = state_for_accept.clone();
        let load = load_for_accept.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::accept_request(&base, token.as_deref(), id).await {
                Ok(()) => {
                    state.toast_success("Request accepted");
                    load();
                }
                Err(err) => state.toast_error(err.user_message()),
            }
        });
    };

    let state_for_decline = state.clone();
    let load_for_decline = load.clone();
    let decline = move |id: i64| {
        let state = state_for_decline.clone();
        let load = load_for_decline.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::decline_request(&base, token.as_deref(), id).await {
                Ok(()) => {
                    state.toast_info("Request declined");
                    load();
                }
                Err(err) => state.toast_error(err.user_message()),
            }
        });
    };

    let state_for_chat = state.clone();
    let open_conversation = move |conversation: ConversationSummary| {
        if let Some(session_id) = conversation.session_id.clone() {
            state_for_chat.session_id.set(Some(session_id));
        }
        let counterpart_id = conversation.provider_id.unwrap_or(conversation.id);
        chat_counterpart.set(Some((counterpart_id, conversation.counterpart_name.clone())));
        chat_open.set(true);
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <ToastHost />
            <ChatModal open=chat_open provider=chat_counterpart />

            <main class="flex-1 max-w-6xl w-full mx-auto px-4 py-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"Provider Dashboard"</h2>

                <Show
                    when=move || is_provider.get()
                    fallback=|| {
                        view! {
                            <div class="bg-white rounded-lg shadow p-8 text-center">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">
                                    "Provider access required"
                                </h3>
                                <p class="text-gray-600 mb-4">
                                    "This dashboard is for registered service providers."
                                </p>
                                <a
                                    href="/provider-signup"
                                    class="inline-block bg-indigo-600 hover:bg-indigo-700 text-white px-5 py-2 rounded-md text-sm font-medium"
                                >
                                    "Apply to become a provider"
                                </a>
                            </div>
                        }
                    }
                >
                    // Stats cards
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                        <div class="bg-white rounded-lg shadow p-4">
                            <p class="text-sm text-gray-500">"New Requests"</p>
                            <p class="text-2xl font-bold text-gray-900">
                                {move || stats.get().new_requests}
                            </p>
                        </div>
                        <div class="bg-white rounded-lg shadow p-4">
                            <p class="text-sm text-gray-500">"Active Chats"</p>
                            <p class="text-2xl font-bold text-gray-900">
                                {move || stats.get().active_chats}
                            </p>
                        </div>
                        <div class="bg-white rounded-lg shadow p-4">
                            <p class="text-sm text-gray-500">"Average Rating"</p>
                            <p class="text-2xl font-bold text-gray-900">
                                {move || format!("{:.1}", stats.get().average_rating)}
                            </p>
                        </div>
                        <div class="bg-white rounded-lg shadow p-4">
                            <p class="text-sm text-gray-500">"Completed Jobs"</p>
                            <p class="text-2xl font-bold text-gray-900">
                                {move || stats.get().completed_jobs}
                            </p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        // Incoming requests
                        <section class="lg:col-span-2 bg-white rounded-lg shadow p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">
                                "Incoming Requests"
                            </h3>
                            {
                                let accept = accept.clone();
                                let decline = decline.clone();
                                move || {
                                let list = requests.get();
                                if list.is_empty() {
                                    view! {
                                        <p class="text-sm text-gray-500 text-center py-8">
                                            "No new requests right now"
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    let accept = accept.clone();
                                    let decline = decline.clone();
                                    list.into_iter()
                                        .map(|request| {
                                            let accept = accept.clone();
                                            let decline = decline.clone();
                                            let id = request.id;
                                            view! {
                                                <div class="border border-gray-200 rounded-lg p-4 mb-4">
                                                    <div class="flex justify-between items-start mb-2">
                                                        <h4 class="font-semibold text-gray-900">
                                                            {catalog::display_name(&request.category)}
                                                        </h4>
                                                        <span class="text-sm text-gray-500">
                                                            {request.created_at.format("%b %e, %H:%M").to_string()}
                                                        </span>
                                                    </div>
                                                    <p class="text-sm text-gray-700 mb-1">
                                                        {request.description.clone()}
                                                    </p>
                                                    <p class="text-xs text-gray-500 mb-3">
                                                        {request.location.clone()}
                                                    </p>
                                                    <div class="flex gap-2">
                                                        <button
                                                            on:click=move |_| accept(id)
                                                            class="bg-green-600 hover:bg-green-700 text-white px-4 py-1.5 rounded-md text-sm font-medium"
                                                        >
                                                            "Accept"
                                                        </button>
                                                        <button
                                                            on:click=move |_| decline(id)
                                                            class="bg-gray-200 hover:bg-gray-300 text-gray-700 px-4 py-1.5 rounded-md text-sm font-medium"
                                                        >
                                                            "Decline"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </section>

                        <div class="space-y-6">
                            // Conversations
                            <section class="bg-white rounded-lg shadow p-6">
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">
                                    "Conversations"
                                </h3>
                                {
                                    let open_conversation = open_conversation.clone();
                                    move || {
                                    let list = conversations.get();
                                    if list.is_empty() {
                                        view! {
                                            <p class="text-sm text-gray-500 text-center py-4">
                                                "No conversations yet"
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        let open_conversation = open_conversation.clone();
                                        list.into_iter()
                                            .map(|conversation| {
                                                let open_conversation = open_conversation.clone();
                                                let row = conversation.clone();
                                                view! {
                                                    <div
                                                        class="border-b border-gray-100 last:border-0 py-3 cursor-pointer hover:bg-gray-50"
                                                        on:click=move |_| open_conversation(row.clone())
                                                    >
                                                        <h4 class="text-sm font-medium text-gray-900 truncate">
                                                            {conversation.counterpart_name.clone()}
                                                        </h4>
                                                        <p class="text-sm text-gray-600 truncate">
                                                            {conversation.last_message.clone()}
                                                        </p>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }
                                }}
                            </section>

                            <ProfileSection />
                        </div>
                    </div>

                    <ServicesSection />
                </Show>
            </main>
        </div>
    }
}

/// Provider profile card with inline editing
#[component]
fn ProfileSection() -> impl IntoView {
    let state = expect_context::<AppState>();

    let profile = RwSignal::new(ProviderProfile::default());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let state_for_load = state.clone();
    Effect::new(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::provider_profile(&base, token.as_deref()).await {
                Ok(value) => profile.set(value),
                Err(err) => tracing::warn!("profile fetch failed: {err:?}"),
            }
        });
    });

    let state_for_save = state.clone();
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let state = state_for_save.clone();
        spawn_local(async move {
            saving.set(true);
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            let body = profile.get_untracked();
            match api::update_provider_profile(&base, token.as_deref(), &body).await {
                Ok(()) => {
                    state.toast_success("Profile updated");
                    editing.set(false);
                }
                Err(err) => state.toast_error(err.user_message()),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-900">"My Profile"</h3>
                <button
                    on:click=move |_| editing.update(|e| *e = !*e)
                    class="text-sm text-indigo-600 hover:text-indigo-800"
                >
                    {move || if editing.get() { "Close" } else { "Edit" }}
                </button>
            </div>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <div class="space-y-2 text-sm text-gray-700">
                            <p>
                                <span class="text-gray-500">"Business: "</span>
                                {move || profile.get().business_name.unwrap_or_default()}
                            </p>
                            <p>
                                <span class="text-gray-500">"Rates: "</span>
                                {move || {
                                    let p = profile.get();
                                    match (p.min_rate, p.max_rate) {
                                        (Some(min), Some(max)) => format!("KSH {min:.0}-{max:.0}/hr"),
                                        _ => "Not set".to_string(),
                                    }
                                }}
                            </p>
                            <p>
                                <span class="text-gray-500">"About: "</span>
                                {move || profile.get().description.unwrap_or_default()}
                            </p>
                        </div>
                    }
                }
            >
                <div class="space-y-3">
                    <div>
                        <label class="block text-xs text-gray-500 mb-1">"Business name"</label>
                        <input
                            type="text"
                            prop:value=move || profile.get().business_name.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                profile.update(|p| {
                                    p.business_name = (!value.is_empty()).then_some(value)
                                });
                            }
                            class="w-full border border-gray-300 rounded-md px-3 py-1.5 text-sm"
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-xs text-gray-500 mb-1">"Min rate (KSH)"</label>
                            <input
                                type="number"
                                prop:value=move || {
                                    profile.get().min_rate.map(|r| r.to_string()).unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    profile.update(|p| p.min_rate = value.parse().ok());
                                }
                                class="w-full border border-gray-300 rounded-md px-3 py-1.5 text-sm"
                            />
                        </div>
                        <div>
                            <label class="block text-xs text-gray-500 mb-1">"Max rate (KSH)"</label>
                            <input
                                type="number"
                                prop:value=move || {
                                    profile.get().max_rate.map(|r| r.to_string()).unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    profile.update(|p| p.max_rate = value.parse().ok());
                                }
                                class="w-full border border-gray-300 rounded-md px-3 py-1.5 text-sm"
                            />
                        </div>
                    </div>
                    <div>
                        <label class="block text-xs text-gray-500 mb-1">"About"</label>
                        <textarea
                            rows="3"
                            prop:value=move || profile.get().description.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                profile.update(|p| {
                                    p.description = (!value.is_empty()).then_some(value)
                                });
                            }
                            class="w-full border border-gray-300 rounded-md px-3 py-1.5 text-sm"
                        ></textarea>
                    </div>
                    <button
                        on:click=save
                        disabled=move || saving.get()
                        class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white py-2 rounded-md text-sm font-medium"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </div>
            </Show>
        </section>
    }
}

/// Offered services, edited against the static catalog
#[component]
fn ServicesSection() -> impl IntoView {
    let state = expect_context::<AppState>();

    let selected = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);

    let state_for_load = state.clone();
    Effect::new(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::provider_services(&base, token.as_deref()).await {
                Ok(value) => selected.set(value.service_ids),
                Err(err) => tracing::warn!("services fetch failed: {err:?}"),
            }
        });
    });

    let state_for_save = state.clone();
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let state = state_for_save.clone();
        spawn_local(async move {
            saving.set(true);
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            let body = ProviderServices {
                service_ids: selected.get_untracked(),
            };
            match api::update_provider_services(&base, token.as_deref(), &body).await {
                Ok(()) => state.toast_success("Services updated"),
                Err(err) => state.toast_error(err.user_message()),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-lg shadow p-6 mt-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-900">"Services I Offer"</h3>
                <button
                    on:click=save
                    disabled=move || saving.get()
                    class="bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white px-4 py-1.5 rounded-md text-sm font-medium"
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-2">
                {catalog::SERVICES
                    .iter()
                    .map(|service| {
                        let id = service.id;
                        view! {
                            <label class="flex items-center text-sm cursor-pointer hover:bg-gray-50 p-1.5 rounded">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected.get().iter().any(|s| s == id)
                                    }
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected.update(|list| {
                                            list.retain(|s| s != id);
                                            if checked {
                                                list.push(id.to_string());
                                            }
                                        });
                                    }
                                    class="mr-2"
                                />
                                <span class="text-gray-700">{service.name}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
