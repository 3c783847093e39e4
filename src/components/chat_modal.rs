//! Chat modal
//!
//! Fetch-then-full-replace message list per (session, provider); no
//! optimistic append. Sending reloads the whole conversation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::types::{ChatMessage, SenderType, SendMessageRequest};

/// Per-session chat with one provider
#[component]
pub fn ChatModal(
    open: RwSignal<bool>,
    /// `(provider_id, provider_name)` of the current conversation
    provider: RwSignal<Option<(i64, String)>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let is_sending = RwSignal::new(false);

    let load_messages = {
        let state = state.clone();
        move || {
            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked();
                let Some(session_id) = state.session_id.get_untracked() else {
                    return;
                };
                match api::chat_messages(&base, token.as_deref(), &session_id).await {
                    Ok(list) => messages.set(list),
                    Err(err) => tracing::error!("failed to load chat messages: {err:?}"),
                }
            });
        }
    };

    // Reload the conversation every time the modal opens
    let load_on_open = load_messages.clone();
    Effect::new(move |_| {
        if open.get() {
            load_on_open();
        }
    });

    let send = {
        let state = state.clone();
        let load_messages = load_messages.clone();
        move || {
            let text = input.get_untracked().trim().to_string();
            if text.is_empty() || is_sending.get_untracked() {
                return;
            }
            let Some((provider_id, _)) = provider.get_untracked() else {
                return;
            };
            let Some(session_id) = state.session_id.get_untracked() else {
                return;
            };

            let state = state.clone();
            let load_messages = load_messages.clone();
            spawn_local(async move {
                is_sending.set(true);
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked();
                let body = SendMessageRequest {
                    provider_id,
                    message_text: text,
                    session_id,
                };
                match api::send_chat_message(&base, token.as_deref(), &body).await {
                    Ok(()) => {
                        input.set(String::new());
                        load_messages();
                    }
                    Err(err) => state.toast_error(err.user_message()),
                }
                is_sending.set(false);
            });
        }
    };

    let send_on_click = send.clone();
    let send_on_enter = send.clone();

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg shadow-xl w-full max-w-lg flex flex-col max-h-[80vh]">
                    // Modal header
                    <div class="flex items-center justify-between p-4 border-b border-gray-200">
                        <h3 class="text-lg font-semibold text-gray-900">
                            {move || {
                                provider
                                    .get()
                                    .map(|(_, name)| format!("Chat with {name}"))
                                    .unwrap_or_else(|| "Chat".to_string())
                            }}
                        </h3>
                        <button
                            on:click=move |_| {
                                open.set(false);
                                provider.set(None);
                            }
                            class="text-gray-400 hover:text-gray-600"
                        >
                            "✕"
                        </button>
                    </div>

                    // Messages
                    <div class="flex-1 overflow-y-auto p-4 min-h-[200px]">
                        {move || {
                            let list = messages.get();
                            if list.is_empty() {
                                view! {
                                    <p class="text-gray-500 text-center">
                                        "No messages yet. Start the conversation!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                list.into_iter()
                                    .map(|msg| view! { <MessageBubble message=msg /> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>

                    // Input
                    <div class="flex items-center gap-2 p-4 border-t border-gray-200">
                        <input
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown={
                                let send = send_on_enter.clone();
                                move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        send();
                                    }
                                }
                            }
                            placeholder="Type a message..."
                            class="flex-1 border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                        />
                        <button
                            on:click={
                                let send = send_on_click.clone();
                                move |_| send()
                            }
                            disabled=move || is_sending.get()
                            class="bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white py-2 px-4 rounded-md text-sm font-medium"
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One chat bubble, aligned by sender side
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let from_user = message.sender_type == SenderType::User;
    let align = if from_user { "text-right" } else { "text-left" };
    let bubble = if from_user {
        "bg-indigo-600 text-white"
    } else {
        "bg-gray-200 text-gray-900"
    };
    let meta = format!(
        "{} • {}",
        message.sender_name,
        message.created_at.format("%H:%M")
    );

    view! {
        <div class=format!("mb-4 {align}")>
            <div class=format!("inline-block max-w-xs px-4 py-2 rounded-lg {bubble}")>
                <p class="text-sm">{message.message_text.clone()}</p>
                <p class="text-xs mt-1 opacity-75">{meta}</p>
            </div>
        </div>
    }
}
