//! Home page: category browsing, problem intake, and provider results
//!
//! The search flow: describe a problem (optionally with photos), run it
//! through the detect endpoint, then query matching providers. When the
//! visitor is not signed in the search is stashed and replayed exactly
//! once after login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{FormData, HtmlInputElement, SubmitEvent};

use crate::api;
use crate::catalog;
use crate::components::{ChatModal, Header, ProviderCard, RatingModal, SignInRequiredModal, ToastHost};
use crate::error::ApiError;
use crate::matching::{self, SortKey};
use crate::state::AppState;
use crate::storage;
use crate::types::{DetectRequest, DetectionResult, PendingSearch, UserType};

/// Query the backend for providers matching the current constraints and
/// replace the cached result set
async fn query_providers(state: &AppState, category: &str) -> Result<(), ApiError> {
    let base = state.api_base.get_untracked();
    let token = state.token.get_untracked();
    let request = state.constraints.get_untracked().request(category);
    let mut providers = api::find_providers(&base, token.as_deref(), &request).await?;
    matching::sort_providers(&mut providers, state.sort_key.get_untracked());
    state.providers.set(providers);
    Ok(())
}

/// Run a provider search for a detection result, deferring it when the
/// user still has to sign in
async fn search_providers(
    state: AppState,
    auth_modal: RwSignal<bool>,
    show_results: RwSignal<bool>,
    detection: DetectionResult,
    description: String,
) {
    let stash = |detection: &DetectionResult| {
        let pending = PendingSearch {
            detection: detection.clone(),
            description: description.clone(),
            category: state
                .selected_category
                .get_untracked()
                .unwrap_or_else(|| detection.final_category.clone()),
            session_id: state.session_id.get_untracked(),
        };
        storage::store_pending_search(&pending);
    };

    if !state.is_authenticated() {
        stash(&detection);
        auth_modal.set(true);
        return;
    }

    match query_providers(&state, &detection.final_category).await {
        Ok(()) => {
            state.detection.set(Some(detection));
            show_results.set(true);
        }
        Err(ApiError::AuthRequired) => {
            stash(&detection);
            auth_modal.set(true);
        }
        Err(err) => {
            tracing::error!("provider search failed: {err:?}");
            state.toast_error(err.user_message());
        }
    }
}

/// Main landing page
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Local page state
    let description = RwSignal::new(String::new());
    let suggested = RwSignal::new(Option::<(String, f64)>::None);
    let analyzing = RwSignal::new(false);
    let searching = RwSignal::new(false);
    let show_results = RwSignal::new(false);
    let auth_modal_open = RwSignal::new(false);
    let chat_open = RwSignal::new(false);
    let chat_provider = RwSignal::new(Option::<(i64, String)>::None);
    let rating_open = RwSignal::new(false);
    let rating_provider = RwSignal::new(Option::<(i64, String)>::None);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Replay a stashed search exactly once after login
    let state_for_replay = state.clone();
    Effect::new(move |_| {
        if !state_for_replay.is_authenticated() {
            return;
        }
        let Some(pending) = storage::take_pending_search() else {
            return;
        };
        tracing::info!("replaying pending provider search");
        description.set(pending.description.clone());
        state_for_replay
            .selected_category
            .set(Some(pending.category.clone()));
        if let Some(session_id) = pending.session_id.clone() {
            state_for_replay.session_id.set(Some(session_id));
        }
        let state = state_for_replay.clone();
        spawn_local(async move {
            search_providers(
                state,
                auth_modal_open,
                show_results,
                pending.detection,
                pending.description,
            )
            .await;
        });
    });

    // "Search" affordance: AI-classify the description and highlight the
    // suggested category without blocking the flow
    let state_for_analyze = state.clone();
    let on_analyze = move |_| {
        let text = description.get_untracked().trim().to_string();
        if text.is_empty() {
            state_for_analyze.toast_error("Please describe your problem first.");
            return;
        }
        if analyzing.get_untracked() {
            return;
        }
        let state = state_for_analyze.clone();
        spawn_local(async move {
            analyzing.set(true);
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            let body = DetectRequest {
                description: text,
                selected_category: None,
                session_id: state.session_id.get_untracked(),
                images: vec![],
            };
            match api::detect_problem(&base, token.as_deref(), &body).await {
                Ok(result) => {
                    state.session_id.set(Some(result.session_id.clone()));
                    suggested.set(Some((result.ai_suggested_category.clone(), result.confidence)));
                    state.toast_success("Search completed! Check the highlighted category below.");
                }
                Err(err) => state.toast_error(err.user_message()),
            }
            analyzing.set(false);
        });
    };

    // Main submit: detect (with any attached images), then search
    let state_for_find = state.clone();
    let on_find = move |ev: SubmitEvent| {
        ev.prevent_default();
        if searching.get_untracked() {
            return;
        }
        let Some(category) = state_for_find.selected_category.get_untracked() else {
            state_for_find.toast_error("Please select a service category");
            return;
        };
        let text = description.get_untracked().trim().to_string();
        let state = state_for_find.clone();

        spawn_local(async move {
            searching.set(true);
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            let session_id = state.session_id.get_untracked();

            let files = file_input_ref
                .get_untracked()
                .map(|input| {
                    let el: &HtmlInputElement = input.as_ref();
                    el.files()
                })
                .flatten();
            let file_count = files.as_ref().map(|f| f.length()).unwrap_or(0);

            let detection = if file_count > 0 {
                // Multipart: fields plus every attached image
                match FormData::new() {
                    Ok(form) => {
                        let _ = form.append_with_str("description", &text);
                        let _ = form.append_with_str("selected_category", &category);
                        if let Some(session_id) = &session_id {
                            let _ = form.append_with_str("session_id", session_id);
                        }
                        if let Some(files) = &files {
                            for i in 0..files.length() {
                                if let Some(file) = files.item(i) {
                                    let _ = form.append_with_blob("images", &file);
                                }
                            }
                        }
                        api::detect_problem_with_images(&base, token.as_deref(), &form).await
                    }
                    Err(_) => Err(ApiError::Network("could not build form data".into())),
                }
            } else {
                let body = DetectRequest {
                    description: text.clone(),
                    selected_category: Some(category.clone()),
                    session_id: session_id.clone(),
                    images: vec![],
                };
                api::detect_problem(&base, token.as_deref(), &body).await
            };

            match detection {
                Ok(result) => {
                    state.session_id.set(Some(result.session_id.clone()));
                    search_providers(state.clone(), auth_modal_open, show_results, result, text)
                        .await;
                }
                Err(err) => state.toast_error(err.user_message()),
            }
            searching.set(false);
        });
    };

    // Re-query with the current filter constraints, then re-apply the sort
    let state_for_filters = state.clone();
    let apply_filters = move || {
        let Some(detection) = state_for_filters.detection.get_untracked() else {
            return;
        };
        if !state_for_filters.is_authenticated() {
            return;
        }
        let state = state_for_filters.clone();
        spawn_local(async move {
            if let Err(err) = query_providers(&state, &detection.final_category).await {
                tracing::error!("filter query failed: {err:?}");
                state.toast_error(err.user_message());
            }
        });
    };

    // Join-as-provider call to action
    let state_for_join = state.clone();
    let navigate = leptos_router::hooks::use_navigate();
    let on_join = move |_| {
        if state_for_join.is_authenticated() {
            match state_for_join.user.get_untracked().map(|u| u.user_type) {
                Some(UserType::Provider) => navigate("/provider-dashboard", Default::default()),
                _ => navigate("/provider-signup", Default::default()),
            }
        } else {
            storage::set_post_login_action("provider-signup");
            navigate("/login", Default::default());
        }
    };

    let chat_cb = Callback::new(move |(id, name): (i64, String)| {
        chat_provider.set(Some((id, name)));
        chat_open.set(true);
    });
    let rate_cb = Callback::new(move |(id, name): (i64, String)| {
        rating_provider.set(Some((id, name)));
        rating_open.set(true);
    });
    let apply_filters_for_rating = apply_filters.clone();
    let rating_submitted = Callback::new(move |_| {
        // A fresh review changes average ratings; refresh a live search
        apply_filters_for_rating();
    });

    let state_for_view = state.clone();
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <ToastHost />
            <SignInRequiredModal open=auth_modal_open />
            <ChatModal open=chat_open provider=chat_provider />
            <RatingModal open=rating_open provider=rating_provider on_submitted=rating_submitted />

            <main class="flex-1 max-w-4xl w-full mx-auto px-4 py-8">
                <Show
                    when=move || show_results.get()
                    fallback={
                        let state = state_for_view.clone();
                        let on_find = on_find.clone();
                        let on_analyze = on_analyze.clone();
                        let on_join = on_join.clone();
                        move || {
                            view! {
                                <IntakeView
                                    state=state.clone()
                                    description=description
                                    suggested=suggested
                                    analyzing=analyzing
                                    searching=searching
                                    file_input_ref=file_input_ref
                                    on_find=on_find.clone()
                                    on_analyze=on_analyze.clone()
                                    on_join=on_join.clone()
                                />
                            }
                        }
                    }
                >
                    <ResultsView
                        state=state_for_view.clone()
                        show_results=show_results
                        apply_filters=apply_filters.clone()
                        on_chat=chat_cb
                        on_rate=rate_cb
                    />
                </Show>
            </main>
        </div>
    }
}

/// Category grid plus the problem intake form
#[component]
fn IntakeView(
    state: AppState,
    description: RwSignal<String>,
    suggested: RwSignal<Option<(String, f64)>>,
    analyzing: RwSignal<bool>,
    searching: RwSignal<bool>,
    file_input_ref: NodeRef<leptos::html::Input>,
    on_find: impl Fn(SubmitEvent) + Clone + 'static,
    on_analyze: impl Fn(web_sys::MouseEvent) + Clone + 'static,
    on_join: impl Fn(web_sys::MouseEvent) + Clone + 'static,
) -> impl IntoView {
    let selected = state.selected_category;

    view! {
        <div class="bg-white rounded-lg shadow-xl p-8">
            <h2 class="text-3xl font-extrabold text-gray-900 mb-2">
                "What do you need help with?"
            </h2>
            <p class="text-gray-600 mb-8">
                "Describe your problem or pick a category, and we'll match you with trusted local professionals."
            </p>

            <form on:submit=on_find>
                // Problem description + AI assist
                <div class="mb-6">
                    <label class="block text-sm font-medium text-gray-700 mb-2">
                        "Describe your problem"
                    </label>
                    <div class="flex gap-2">
                        <textarea
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                            placeholder="e.g. Water is leaking under my kitchen sink..."
                            class="flex-1 border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                        ></textarea>
                        <button
                            type="button"
                            on:click=on_analyze
                            disabled=move || analyzing.get()
                            class="self-start bg-gray-100 hover:bg-gray-200 disabled:opacity-50 text-gray-700 px-4 py-2 rounded-md text-sm font-medium"
                        >
                            {move || if analyzing.get() { "Searching..." } else { "Search" }}
                        </button>
                    </div>
                </div>

                // Photos
                <div class="mb-6">
                    <label class="block text-sm font-medium text-gray-700 mb-2">
                        "Photos (optional)"
                    </label>
                    <input
                        node_ref=file_input_ref
                        type="file"
                        accept="image/*"
                        multiple=true
                        class="block text-sm text-gray-600"
                    />
                </div>

                // Category grid
                <div class="mb-8">
                    <label class="block text-sm font-medium text-gray-700 mb-2">
                        "Service category"
                    </label>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                        {catalog::categories()
                            .iter()
                            .map(|category| {
                                let key = category.key;
                                let color = category.color;
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| selected.set(Some(key.to_string()))
                                        class=move || {
                                            let base = catalog::color_classes(color);
                                            let ring = if selected.get().as_deref() == Some(key) {
                                                "ring-2 ring-indigo-600"
                                            } else if suggested
                                                .get()
                                                .map(|(s, _)| s == key)
                                                .unwrap_or(false)
                                            {
                                                "ring-2 ring-green-500"
                                            } else {
                                                ""
                                            };
                                            format!("border-2 rounded-lg p-3 text-left transition-colors {base} {ring}")
                                        }
                                    >
                                        <div class="text-2xl mb-1">{category.icon}</div>
                                        <div class="text-sm font-semibold text-gray-900">
                                            {category.name}
                                        </div>
                                        <Show when=move || {
                                            suggested.get().map(|(s, _)| s == key).unwrap_or(false)
                                        }>
                                            <div class="text-xs text-green-700 font-medium mt-1">
                                                {move || {
                                                    let confidence = suggested
                                                        .get()
                                                        .map(|(_, c)| (c * 100.0).round() as i64)
                                                        .unwrap_or(0);
                                                    format!("AI suggested ({confidence}%)")
                                                }}
                                            </div>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <button
                    type="submit"
                    disabled=move || searching.get()
                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white font-semibold py-3 rounded-md transition-colors"
                >
                    {move || if searching.get() { "Finding Professionals..." } else { "Find Professionals" }}
                </button>
            </form>
        </div>

        // Provider call to action
        <div class="mt-8 bg-indigo-50 border border-indigo-200 rounded-lg p-6 flex items-center justify-between">
            <div>
                <h3 class="text-lg font-semibold text-indigo-900">"Are you a professional?"</h3>
                <p class="text-sm text-indigo-700">
                    "Join FundiLink and reach clients in your area."
                </p>
            </div>
            <button
                on:click=on_join
                class="bg-indigo-600 hover:bg-indigo-700 text-white px-5 py-2 rounded-md text-sm font-medium"
            >
                "Join as Provider"
            </button>
        </div>
    }
}

/// Provider results with filters, sorting, and next steps
#[component]
fn ResultsView(
    state: AppState,
    show_results: RwSignal<bool>,
    apply_filters: impl Fn() + Clone + 'static,
    on_chat: Callback<(i64, String)>,
    on_rate: Callback<(i64, String)>,
) -> impl IntoView {
    let providers = state.providers;
    let detection = state.detection;
    let constraints = state.constraints;
    let sort_key = state.sort_key;

    let on_distance = {
        let apply_filters = apply_filters.clone();
        move |ev: web_sys::Event| {
            if let Ok(km) = event_target_value(&ev).parse::<f64>() {
                constraints.update(|c| c.max_distance_km = km);
                apply_filters();
            }
        }
    };
    let on_rating = {
        let apply_filters = apply_filters.clone();
        move |ev: web_sys::Event| {
            if let Ok(rating) = event_target_value(&ev).parse::<f64>() {
                constraints.update(|c| c.min_rating = rating);
                apply_filters();
            }
        }
    };
    let on_rate_filter = {
        let apply_filters = apply_filters.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            constraints.update(|c| c.max_rate = value.parse::<f64>().ok());
            apply_filters();
        }
    };
    // Sorting is pure client-side: reorder the cached set, no re-query
    let on_sort = move |ev: web_sys::Event| {
        if let Some(key) = SortKey::from_value(&event_target_value(&ev)) {
            sort_key.set(key);
            providers.update(|list| matching::sort_providers(list, key));
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow-xl p-8">
            // Header with back button
            <div class="flex items-center justify-between mb-8">
                <div>
                    <button
                        on:click=move |_| show_results.set(false)
                        class="flex items-center text-indigo-600 hover:text-indigo-800 mb-4"
                    >
                        "← Back to Categories"
                    </button>
                    <h2 class="text-3xl font-extrabold text-gray-900">"Professionals Found"</h2>
                    <p class="mt-2 text-lg text-gray-600">
                        "Category: "
                        <span class="font-semibold">
                            {move || {
                                detection
                                    .get()
                                    .map(|d| catalog::display_name(&d.final_category))
                                    .unwrap_or_default()
                            }}
                        </span>
                    </p>
                    <p class="text-sm text-gray-500">
                        {move || format!("{} professionals in your area", providers.get().len())}
                    </p>
                </div>
                <div class="text-right text-sm text-gray-500">
                    <p>
                        {move || {
                            detection
                                .get()
                                .map(|d| format!("Session: {}", &d.session_id[..d.session_id.len().min(8)]))
                                .unwrap_or_default()
                        }}
                    </p>
                    <p>
                        {move || {
                            detection
                                .get()
                                .map(|d| format!("Priority: {}", d.urgency_level.label()))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
            </div>

            // Filters
            <div class="bg-gray-50 rounded-lg p-6 mb-8">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Filter Results"</h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Max Distance"</label>
                        <select
                            on:change=on_distance
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                        >
                            <option value="50">"Any distance"</option>
                            <option value="5">"Within 5 km"</option>
                            <option value="10">"Within 10 km"</option>
                            <option value="25">"Within 25 km"</option>
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Min Rating"</label>
                        <select
                            on:change=on_rating
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                        >
                            <option value="0">"Any rating"</option>
                            <option value="3">"3+ stars"</option>
                            <option value="4">"4+ stars"</option>
                            <option value="4.5">"4.5+ stars"</option>
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Max Rate"</label>
                        <select
                            on:change=on_rate_filter
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                        >
                            <option value="">"Any rate"</option>
                            <option value="1000">"Under KSH 1,000/hr"</option>
                            <option value="2500">"Under KSH 2,500/hr"</option>
                            <option value="5000">"Under KSH 5,000/hr"</option>
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Sort By"</label>
                        <select
                            on:change=on_sort
                            class="w-full border border-gray-300 rounded-md px-3 py-2"
                        >
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option
                                            value=key.as_value()
                                            selected=move || sort_key.get() == key
                                        >
                                            {key.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>
            </div>

            // Providers grid
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8">
                {move || {
                    providers
                        .get()
                        .into_iter()
                        .map(|provider| {
                            view! {
                                <ProviderCard provider=provider on_chat=on_chat on_rate=on_rate />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            // Next steps
            <Show when=move || {
                detection.get().map(|d| !d.next_steps.is_empty()).unwrap_or(false)
            }>
                <div class="bg-blue-50 border border-blue-200 rounded-lg p-6">
                    <h4 class="text-lg font-semibold text-blue-900 mb-3">"Next Steps"</h4>
                    <ul class="space-y-2">
                        {move || {
                            detection
                                .get()
                                .map(|d| d.next_steps)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|step| {
                                    view! {
                                        <li class="flex items-start">
                                            <span class="text-blue-600 mr-2">"›"</span>
                                            <span class="text-blue-800">{step}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
