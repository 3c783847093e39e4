//! Client dashboard: request/conversation/activity lists refreshed on a
//! fixed 30-second cadence

use futures::join;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ChatModal, Header, ToastHost};
use crate::state::AppState;
use crate::storage;
use crate::types::{ActivityItem, ClientStats, ConversationSummary, ServiceRequestSummary};

const POLL_INTERVAL_MS: u32 = 30_000;

/// Fetch all dashboard data sets concurrently. Individual failures are
/// logged and leave the previous render in place; the next tick retries.
async fn load_dashboard(
    state: AppState,
    stats: RwSignal<ClientStats>,
    requests: RwSignal<Vec<ServiceRequestSummary>>,
    conversations: RwSignal<Vec<ConversationSummary>>,
    activity: RwSignal<Vec<ActivityItem>>,
) {
    let base = state.api_base.get_untracked();
    let token = state.token.get_untracked();
    let token = token.as_deref();

    let (stats_res, requests_res, conversations_res, activity_res) = join!(
        api::client_stats(&base, token),
        api::client_requests(&base, token),
        api::client_conversations(&base, token),
        api::client_activity(&base, token),
    );

    match stats_res {
        Ok(value) => stats.set(value),
        Err(err) => tracing::warn!("client stats fetch failed: {err:?}"),
    }
    match requests_res {
        Ok(value) => requests.set(value),
        Err(err) => tracing::warn!("client requests fetch failed: {err:?}"),
    }
    match conversations_res {
        Ok(value) => conversations.set(value),
        Err(err) => tracing::warn!("client conversations fetch failed: {err:?}"),
    }
    match activity_res {
        Ok(value) => activity.set(value),
        Err(err) => tracing::warn!("client activity fetch failed: {err:?}"),
    }
}

/// Client dashboard page
#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let stats = RwSignal::new(ClientStats::default());
    let requests = RwSignal::new(Vec::<ServiceRequestSummary>::new());
    let conversations = RwSignal::new(Vec::<ConversationSummary>::new());
    let activity = RwSignal::new(Vec::<ActivityItem>::new());
    let chat_open = RwSignal::new(false);
    let chat_provider = RwSignal::new(Option::<(i64, String)>::None);

    // Must be signed in; preserve the location for the trip back
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

    let state_for_load = state.clone();
    let load = move || {
        let state = state_for_load.clone();
        spawn_local(async move {
            load_dashboard(state, stats, requests, conversations, activity).await;
        });
    };

    // Initial load plus a wall-clock timer; ticks are not chained off
    // response completion. The interval lives in component-local storage
    // so it is dropped (and cancelled) when the page unmounts.
    load();
    let load_for_timer = load.clone();
    let _poll = StoredValue::new_local(Interval::new(POLL_INTERVAL_MS, move || load_for_timer()));

    let state_for_cancel = state.clone();
    let load_for_cancel = load.clone();
    let cancel = move |id: i64| {
        let state = state_for_cancel.clone();
        let load = load_for_cancel.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::cancel_request(&base, token.as_deref(), id).await {
                Ok(()) => {
                    state.toast_success("Request cancelled");
                    load();
                }
                Err(err) => state.toast_error(err.user_message()),
            }
        });
    };

    // Start a conversation with a provider that responded to a request
    let state_for_start = state.clone();
    let start_chat = move |(provider_id, provider_name, request_id): (i64, String, i64)| {
        let state = state_for_start.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            match api::start_conversation(&base, token.as_deref(), provider_id, request_id).await {
                Ok(()) => {
                    chat_provider.set(Some((provider_id, provider_name)));
                    chat_open.set(true);
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
        let provider_id = conversation.provider_id.unwrap_or(conversation.id);
        chat_provider.set(Some((provider_id, conversation.counterpart_name.clone())));
        chat_open.set(true);
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <ToastHost />
            <ChatModal open=chat_open provider=chat_provider />

            <main class="flex-1 max-w-6xl w-full mx-auto px-4 py-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">"My Dashboard"</h2>

                // Stats cards
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    <StatCard label="Active Requests" value=Signal::derive(move || stats.get().active_requests.to_string()) />
                    <StatCard label="Active Chats" value=Signal::derive(move || stats.get().active_chats.to_string()) />
                    <StatCard label="Completed" value=Signal::derive(move || stats.get().completed.to_string()) />
                    <StatCard label="Total Spent" value=Signal::derive(move || format!("KSH {:.0}", stats.get().total_spent)) />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    // Requests
                    <section class="lg:col-span-2 bg-white rounded-lg shadow p-6">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Service Requests"</h3>
                        {move || {
                            let list = requests.get();
                            if list.is_empty() {
                                view! {
                                    <div class="text-center py-8 text-gray-500">
                                        <p>"No service requests yet"</p>
                                        <p class="text-sm">"Create your first request to get started"</p>
                                        <a
                                            href="/"
                                            class="inline-block mt-4 bg-indigo-600 hover:bg-indigo-700 text-white px-4 py-2 rounded-md text-sm"
                                        >
                                            "Create Request"
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let cancel = cancel.clone();
                                let start_chat = start_chat.clone();
                                list.into_iter()
                                    .map(|request| {
                                        let cancel = cancel.clone();
                                        let start_chat = start_chat.clone();
                                        view! {
                                            <RequestRow
                                                request=request
                                                cancel=cancel
                                                start_chat=start_chat
                                            />
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
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Conversations"</h3>
                            {move || {
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
                                                    <div class="flex justify-between items-center">
                                                        <h4 class="text-sm font-medium text-gray-900 truncate">
                                                            {conversation.counterpart_name.clone()}
                                                        </h4>
                                                        <Show when={
                                                            let unread = conversation.unread_count;
                                                            move || unread > 0
                                                        }>
                                                            <span class="inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium bg-indigo-100 text-indigo-800">
                                                                {conversation.unread_count} " new"
                                                            </span>
                                                        </Show>
                                                    </div>
                                                    <p class="text-sm text-gray-600 truncate">
                                                        {conversation.last_message.clone()}
                                                    </p>
                                                    <p class="text-xs text-gray-500">
                                                        {conversation.service_category.clone()}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </section>

                        // Activity
                        <section class="bg-white rounded-lg shadow p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Recent Activity"</h3>
                            {move || {
                                let list = activity.get();
                                if list.is_empty() {
                                    view! {
                                        <p class="text-sm text-gray-500 text-center py-4">
                                            "No recent activity"
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="py-3 border-b border-gray-100 last:border-0">
                                                    <p class="text-sm text-gray-900">{item.description.clone()}</p>
                                                    <p class="text-xs text-gray-500">
                                                        {item.created_at.format("%b %e, %H:%M").to_string()}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </section>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// One stat card
#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-2xl font-bold text-gray-900">{move || value.get()}</p>
        </div>
    }
}

/// One request row with status badge, responder list, and cancel action
#[component]
fn RequestRow(
    request: ServiceRequestSummary,
    cancel: impl Fn(i64) + Clone + 'static,
    start_chat: impl Fn((i64, String, i64)) + Clone + 'static,
) -> impl IntoView {
    let badge = match request.status.as_str() {
        "active" => "bg-green-100 text-green-800",
        "completed" => "bg-blue-100 text-blue-800",
        "cancelled" => "bg-gray-100 text-gray-600",
        _ => "bg-yellow-100 text-yellow-800",
    };
    let is_active = request.status == "active";
    let request_id = request.id;
    let responders = request.provider_responses.clone();

    view! {
        <div class="border border-gray-200 rounded-lg p-4 mb-4">
            <div class="flex justify-between items-start mb-3">
                <div>
                    <h4 class="font-semibold text-gray-900">
                        {crate::catalog::display_name(&request.category)}
                    </h4>
                    <p class="text-sm text-gray-600">{request.location.clone()}</p>
                </div>
                <div class="text-right">
                    <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {badge}")>
                        {request.status.clone()}
                    </span>
                    <p class="text-sm text-gray-500 mt-1">
                        {request.created_at.format("%b %e").to_string()}
                    </p>
                </div>
            </div>

            <p class="text-gray-700 text-sm mb-3 line-clamp-2">{request.description.clone()}</p>

            // Providers that responded, each one chat away
            {(!responders.is_empty()).then(|| {
                let start_chat = start_chat.clone();
                view! {
                    <div class="space-y-2 mb-3">
                        {responders
                            .iter()
                            .map(|provider| {
                                let start_chat = start_chat.clone();
                                let target = (provider.id, provider.name.clone(), request_id);
                                view! {
                                    <div class="flex justify-between items-center p-2 border border-gray-100 rounded">
                                        <div>
                                            <span class="text-sm font-medium text-gray-900">
                                                {provider.name.clone()}
                                            </span>
                                            <span class="text-xs text-gray-500 ml-2">
                                                {format!("★ {:.1}", provider.rating)}
                                            </span>
                                        </div>
                                        <button
                                            on:click=move |_| start_chat(target.clone())
                                            class="text-indigo-600 hover:text-indigo-700 text-sm font-medium"
                                        >
                                            "Chat"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}

            <div class="flex justify-between items-center text-sm">
                {if request.provider_count > 0 {
                    view! {
                        <span class="text-green-600">
                            {format!("{} provider(s) responded", request.provider_count)}
                        </span>
                    }
                        .into_any()
                } else {
                    view! { <span class="text-yellow-600">"Waiting for responses"</span> }.into_any()
                }}
                <Show when=move || is_active>
                    <button
                        on:click={
                            let cancel = cancel.clone();
                            move |_| cancel(request_id)
                        }
                        class="text-red-600 hover:text-red-700"
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </div>
    }
}
