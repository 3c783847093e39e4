//! Provider application wizard page
//!
//! Four linear steps over the [`crate::wizard::Wizard`] state machine,
//! with localStorage autosave/restore and a multipart submission. The
//! identity step is prefilled from the signed-in account and locked.

use std::collections::BTreeSet;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::FormData;

use crate::api;
use crate::catalog;
use crate::components::{Header, ToastHost};
use crate::locations;
use crate::state::AppState;
use crate::storage;
use crate::types::{ResponseTime, UserType};
use crate::wizard::{ServiceRadius, TriState, Wizard, TOTAL_STEPS};

const AUTOSAVE_INTERVAL_MS: u32 = 30_000;
const AUTOSAVE_DEBOUNCE_MS: u32 = 1_000;

const STEP_LABELS: [&str; TOTAL_STEPS as usize] =
    ["Your Details", "Services", "Location", "Rates"];

/// Provider signup page
#[component]
pub fn ProviderSignupPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Pick up any session change made on another page before the guards run
    state.refresh();

    let wizard = RwSignal::new(Wizard::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let saved_flash = RwSignal::new(false);
    let restored_flash = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let transition_redirect = RwSignal::new(Option::<String>::None);
    let submitted = RwSignal::new(false);
    let debounce = StoredValue::new_local(Option::<Timeout>::None);
    let flash_timer = StoredValue::new_local(Option::<Timeout>::None);

    // Unauthenticated visitors go to login first; the wizard needs an
    // account to prefill and lock the identity fields
    let state_for_guard = state.clone();
    let navigate_for_guard = navigate.clone();
    Effect::new(move |_| {
        if state_for_guard.token.get().is_none() || state_for_guard.user.get().is_none() {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    storage::set_return_url(&href);
                }
            }
            state_for_guard.toast_warning("Please log in to apply as a service provider");
            navigate_for_guard("/login", Default::default());
        }
    });

    let already_provider = Signal::derive({
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .map(|u| u.user_type == UserType::Provider)
                .unwrap_or(false)
        }
    });

    // Prefill from the account, then overlay any saved progress
    let state_for_init = state.clone();
    Effect::new(move |_| {
        let Some(user) = state_for_init.user.get() else {
            return;
        };
        if user.user_type == UserType::Provider {
            return;
        }
        let mut fresh = Wizard::for_account(&user.name, &user.email, user.phone.as_deref());
        if let Some(saved) = storage::load_wizard_state() {
            let resumed_past_start = saved.step > 1;
            fresh.restore(saved);
            if resumed_past_start {
                restored_flash.set(true);
            }
        }
        wizard.set(fresh);
    });

    // --- autosave plumbing -------------------------------------------

    let save_now = move || {
        storage::save_wizard_state(&wizard.get_untracked().snapshot());
        saved_flash.set(true);
        flash_timer.set_value(Some(Timeout::new(2_000, move || saved_flash.set(false))));
    };

    // Change events save immediately; free-text input is debounced
    let save_debounced = move || {
        debounce.set_value(Some(Timeout::new(AUTOSAVE_DEBOUNCE_MS, move || {
            save_now();
        })));
    };

    let _autosave = StoredValue::new_local(Interval::new(AUTOSAVE_INTERVAL_MS, move || save_now()));

    // --- navigation ---------------------------------------------------

    let state_for_next = state.clone();
    let on_next = move |_| {
        let mut outcome = Default::default();
        wizard.update(|w| outcome = w.next_step());
        errors.set(outcome.errors.clone());
        for warning in &outcome.warnings {
            state_for_next.toast_warning(warning.clone());
        }
        if outcome.ok() {
            save_now();
        }
    };

    let on_prev = move |_| {
        wizard.update(|w| w.prev_step());
        errors.set(vec![]);
    };

    // --- submission ---------------------------------------------------

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let mut outcome = Default::default();
        wizard.update(|w| outcome = w.validate_current_step());
        errors.set(outcome.errors.clone());
        if !outcome.ok() {
            return;
        }

        let state = state_for_submit.clone();
        spawn_local(async move {
            submitting.set(true);
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();

            let form = match FormData::new() {
                Ok(form) => form,
                Err(_) => {
                    state.toast_error("Something went wrong. Please try again.");
                    submitting.set(false);
                    return;
                }
            };
            for (key, value) in wizard.get_untracked().submission_fields() {
                let _ = form.append_with_str(&key, &value);
            }

            match api::apply_provider(&base, token.as_deref(), &form).await {
                Ok(response) => {
                    storage::clear_wizard_state();
                    if response.user_transition {
                        // Account upgraded client -> provider
                        if let Some(user) = response.user_data {
                            state.set_user(user);
                        }
                        transition_redirect.set(Some(
                            response
                                .redirect_to
                                .unwrap_or_else(|| "/provider-dashboard".to_string()),
                        ));
                    } else {
                        submitted.set(true);
                    }
                }
                Err(err) => {
                    // Field-level detail when the backend sends it,
                    // generic otherwise; the submit control comes back in
                    // every failure path
                    state.toast_error(format!("Submission failed: {}", err.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <ToastHost />
            <TransitionModal redirect=transition_redirect />
            <SuccessModal open=submitted />

            <main class="flex-1 max-w-3xl w-full mx-auto px-4 py-8">
                <Show
                    when=move || !already_provider.get()
                    fallback=|| view! { <AlreadyProviderNotice /> }
                >
                    <h2 class="text-2xl font-bold text-gray-900 mb-2">
                        "Become a FundiLink Provider"
                    </h2>
                    <p class="text-gray-600 mb-6">
                        "Tell us about your services. Your progress is saved automatically."
                    </p>

                    // Progress indicator
                    <div class="mb-8">
                        <div class="flex justify-between mb-2">
                            {STEP_LABELS
                                .iter()
                                .enumerate()
                                .map(|(i, label)| {
                                    let step = (i + 1) as u8;
                                    view! {
                                        <span class=move || {
                                            let current = wizard.get().step;
                                            if step < current {
                                                "text-sm text-green-700 font-medium"
                                            } else if step == current {
                                                "text-sm text-gray-900 font-medium"
                                            } else {
                                                "text-sm text-gray-500"
                                            }
                                        }>{*label}</span>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="w-full bg-gray-200 rounded-full h-2">
                            <div
                                class="bg-indigo-600 h-2 rounded-full transition-all"
                                style=move || {
                                    format!("width: {}%", wizard.get().progress() * 100.0)
                                }
                            ></div>
                        </div>
                    </div>

                    // Validation errors
                    <Show when=move || !errors.get().is_empty()>
                        <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-md">
                            <ul class="text-sm text-red-700 list-disc list-inside space-y-1">
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|e| view! { <li>{e}</li> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </div>
                    </Show>

                    <form on:submit=on_submit.clone() class="bg-white rounded-lg shadow p-6">
                        <Show when=move || wizard.get().step == 1>
                            <IdentityStep wizard=wizard save_debounced=save_debounced />
                        </Show>
                        <Show when=move || wizard.get().step == 2>
                            <ServicesStep wizard=wizard save_now=save_now />
                        </Show>
                        <Show when=move || wizard.get().step == 3>
                            <LocationStep wizard=wizard save_now=save_now save_debounced=save_debounced />
                        </Show>
                        <Show when=move || wizard.get().step == 4>
                            <RatesStep wizard=wizard save_debounced=save_debounced />
                        </Show>

                        // Step controls
                        <div class="flex justify-between mt-8">
                            <button
                                type="button"
                                on:click=on_prev
                                disabled=move || wizard.get().step == 1
                                class="bg-gray-200 hover:bg-gray-300 disabled:opacity-50 text-gray-700 px-5 py-2 rounded-md text-sm font-medium"
                            >
                                "Back"
                            </button>
                            <Show
                                when=move || wizard.get().step < TOTAL_STEPS
                                fallback=move || {
                                    view! {
                                        <button
                                            type="submit"
                                            disabled=move || submitting.get()
                                            class="bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-300 text-white px-6 py-2 rounded-md text-sm font-medium"
                                        >
                                            {move || {
                                                if submitting.get() {
                                                    "Submitting..."
                                                } else {
                                                    "Submit Application"
                                                }
                                            }}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    type="button"
                                    on:click=on_next.clone()
                                    class="bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-2 rounded-md text-sm font-medium"
                                >
                                    "Next"
                                </button>
                            </Show>
                        </div>
                    </form>

                    // Save indicator
                    <Show when=move || saved_flash.get()>
                        <div class="fixed bottom-4 right-4 bg-blue-100 border border-blue-300 text-blue-700 px-3 py-2 rounded shadow-lg text-sm">
                            "Progress saved"
                        </div>
                    </Show>
                    <Show when=move || restored_flash.get()>
                        <div class="fixed top-20 left-1/2 transform -translate-x-1/2 bg-blue-500 text-white px-6 py-3 rounded-lg shadow-lg z-40">
                            <div class="flex items-center gap-3">
                                <div>
                                    <div class="font-medium">"Form Progress Restored"</div>
                                    <div class="text-sm opacity-90">
                                        "Your previous progress has been restored"
                                    </div>
                                </div>
                                <button
                                    on:click=move |_| restored_flash.set(false)
                                    class="text-white/80 hover:text-white"
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}

/// Step 1: identity, prefilled and locked from the account
#[component]
fn IdentityStep(wizard: RwSignal<Wizard>, save_debounced: impl Fn() + Copy + 'static) -> impl IntoView {
    let locked = move || wizard.get().identity_locked;

    view! {
        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Your Details"</h3>

        <Show when=locked>
            <div class="bg-blue-50 border border-blue-200 rounded-lg p-4 mb-6 text-sm text-blue-700">
                "Your name, email, and phone number are taken from your account. \
                 To change them, update your account settings first."
            </div>
        </Show>

        <div class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Full name *"</label>
                <input
                    type="text"
                    prop:value=move || wizard.get().form.full_name
                    readonly=locked
                    on:input=move |ev| {
                        wizard.update(|w| w.form.full_name = event_target_value(&ev));
                        save_debounced();
                    }
                    class=move || input_class(locked())
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Email *"</label>
                <input
                    type="email"
                    prop:value=move || wizard.get().form.email
                    readonly=locked
                    on:input=move |ev| {
                        wizard.update(|w| w.form.email = event_target_value(&ev));
                        save_debounced();
                    }
                    class=move || input_class(locked())
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Phone *"</label>
                <input
                    type="tel"
                    prop:value=move || wizard.get().form.phone
                    readonly=locked
                    on:input=move |ev| {
                        wizard.update(|w| w.form.phone = event_target_value(&ev));
                        save_debounced();
                    }
                    placeholder="07XX XXX XXX"
                    class=move || input_class(locked())
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Business name"</label>
                <input
                    type="text"
                    prop:value=move || wizard.get().form.business_name
                    on:input=move |ev| {
                        wizard.update(|w| w.form.business_name = event_target_value(&ev));
                        save_debounced();
                    }
                    placeholder="e.g. Jane's Plumbing Services"
                    class=input_class(false)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "About you and your work"
                </label>
                <textarea
                    rows="3"
                    prop:value=move || wizard.get().form.description
                    on:input=move |ev| {
                        wizard.update(|w| w.form.description = event_target_value(&ev));
                        save_debounced();
                    }
                    placeholder="Experience, qualifications, what makes your service stand out..."
                    class=input_class(false)
                ></textarea>
            </div>
        </div>
    }
}

fn input_class(locked: bool) -> String {
    let base = "w-full border border-gray-300 rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-500";
    if locked {
        format!("{base} bg-gray-100 cursor-not-allowed")
    } else {
        base.to_string()
    }
}

/// Step 2: service selection with tri-state category checkboxes plus a
/// response-time choice
#[component]
fn ServicesStep(wizard: RwSignal<Wizard>, save_now: impl Fn() + Copy + 'static) -> impl IntoView {
    let expanded = RwSignal::new(BTreeSet::<String>::new());

    view! {
        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Services You Offer"</h3>
        <p class="text-sm text-gray-600 mb-4">
            "Pick whole categories or individual services."
        </p>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
            {catalog::categories()
                .iter()
                .map(|category| {
                    let key = category.key;
                    let is_expanded = move || expanded.get().contains(key);
                    view! {
                        <div class="border-2 border-gray-200 rounded-lg p-4 hover:border-indigo-300 transition-colors">
                            <label class="flex items-start cursor-pointer">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        wizard.get().form.category_state(key) == TriState::Checked
                                    }
                                    prop:indeterminate=move || {
                                        wizard.get().form.category_state(key)
                                            == TriState::Indeterminate
                                    }
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        wizard.update(|w| w.form.set_category(key, checked));
                                        if checked {
                                            expanded.update(|set| {
                                                set.insert(key.to_string());
                                            });
                                        }
                                        save_now();
                                    }
                                    class="mt-1 mr-3"
                                />
                                <div class="flex-1">
                                    <div class="flex items-center mb-1">
                                        <span class="mr-2">{category.icon}</span>
                                        <span class="font-semibold text-gray-900">
                                            {category.name}
                                        </span>
                                    </div>
                                    <p class="text-sm text-gray-600 mb-2">{category.description}</p>
                                    <button
                                        type="button"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            expanded.update(|set| {
                                                if !set.remove(key) {
                                                    set.insert(key.to_string());
                                                }
                                            });
                                        }
                                        class="text-sm text-indigo-600 hover:text-indigo-800"
                                    >
                                        {move || {
                                            if is_expanded() {
                                                "Hide specific services"
                                            } else {
                                                "Show specific services"
                                            }
                                        }}
                                    </button>
                                </div>
                            </label>

                            <Show when=is_expanded>
                                <div class="ml-6 mt-3 border-l-2 border-gray-200 pl-4 space-y-1">
                                    {catalog::services_for(key)
                                        .into_iter()
                                        .map(|service| {
                                            let name = service.name;
                                            view! {
                                                <label class="flex items-center text-sm cursor-pointer hover:bg-gray-50 p-1 rounded">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            wizard
                                                                .get()
                                                                .form
                                                                .is_service_selected(key, name)
                                                        }
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            wizard.update(|w| {
                                                                w.form.set_service(key, name, checked)
                                                            });
                                                            save_now();
                                                        }
                                                        class="mr-2"
                                                    />
                                                    <span class="text-gray-700">{name}</span>
                                                </label>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        // Selection summary
        <Show when=move || wizard.get().form.has_service_selection()>
            <div class="bg-green-50 border border-green-200 rounded-lg p-4 mb-6 text-sm">
                {move || {
                    let form = wizard.get().form;
                    let full: Vec<String> = form
                        .full_categories()
                        .iter()
                        .map(|k| catalog::display_name(k))
                        .collect();
                    let count = form.selected_services.len();
                    let mut summary = format!("{count} services selected");
                    if !full.is_empty() {
                        summary.push_str(&format!(" • Full categories: {}", full.join(", ")));
                    }
                    summary
                }}
            </div>
        </Show>

        // Response time
        <h4 class="font-medium text-gray-900 mb-2">"How quickly do you typically respond? *"</h4>
        <div class="space-y-2">
            {[ResponseTime::SameDay, ResponseTime::Within48h, ResponseTime::WithinWeek]
                .into_iter()
                .map(|rt| {
                    view! {
                        <label class="flex items-center text-sm cursor-pointer">
                            <input
                                type="radio"
                                name="responseTime"
                                prop:checked=move || {
                                    wizard.get().form.response_time == Some(rt)
                                }
                                on:change=move |_| {
                                    wizard.update(|w| w.form.response_time = Some(rt));
                                    save_now();
                                }
                                class="mr-2"
                            />
                            <span class="text-gray-700">{rt.label()}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Step 3: cascading administrative selects, optional coordinates, and
/// service radius
#[component]
fn LocationStep(
    wizard: RwSignal<Wizard>,
    save_now: impl Fn() + Copy + 'static,
    save_debounced: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let select_class = "w-full border border-gray-300 rounded-md px-3 py-2 disabled:bg-gray-100";

    view! {
        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Where You Work"</h3>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"County *"</label>
                <select
                    on:change=move |ev| {
                        wizard.update(|w| w.form.set_county(event_target_value(&ev)));
                        save_now();
                    }
                    class=select_class
                >
                    <option value="" selected=move || wizard.get().form.county.is_empty()>
                        "Select County"
                    </option>
                    {locations::counties()
                        .iter()
                        .map(|county| {
                            let name = county.name;
                            view! {
                                <option
                                    value=name
                                    selected=move || wizard.get().form.county == name
                                >
                                    {format!("{name} County")}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Sub-County *"</label>
                <select
                    disabled=move || wizard.get().form.county.is_empty()
                    on:change=move |ev| {
                        wizard.update(|w| w.form.set_sub_county(event_target_value(&ev)));
                        save_now();
                    }
                    class=select_class
                >
                    <option value="" selected=move || wizard.get().form.sub_county.is_empty()>
                        "Select Sub-County"
                    </option>
                    {move || {
                        let form = wizard.get().form;
                        locations::sub_counties(&form.county)
                            .iter()
                            .map(|sc| {
                                let name = sc.name;
                                let selected = form.sub_county == name;
                                view! {
                                    <option value=name selected=selected>{name}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Ward *"</label>
                <select
                    disabled=move || wizard.get().form.sub_county.is_empty()
                    on:change=move |ev| {
                        wizard.update(|w| w.form.set_ward(event_target_value(&ev)));
                        save_now();
                    }
                    class=select_class
                >
                    <option value="" selected=move || wizard.get().form.ward.is_empty()>
                        "Select Ward"
                    </option>
                    {move || {
                        let form = wizard.get().form;
                        locations::wards(&form.county, &form.sub_county)
                            .iter()
                            .map(|ward| {
                                let name = ward.name;
                                let selected = form.ward == name;
                                view! {
                                    <option value=name selected=selected>{name}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "Specific Area (optional)"
                </label>
                <select
                    disabled=move || wizard.get().form.ward.is_empty()
                    on:change=move |ev| {
                        wizard.update(|w| w.form.area = event_target_value(&ev));
                        save_now();
                    }
                    class=select_class
                >
                    <option value="" selected=move || wizard.get().form.area.is_empty()>
                        "Select Specific Area (Optional)"
                    </option>
                    {move || {
                        let form = wizard.get().form;
                        locations::areas(&form.county, &form.sub_county, &form.ward)
                            .unwrap_or(&[])
                            .iter()
                            .map(|area| {
                                let selected = form.area == *area;
                                view! {
                                    <option value=*area selected=selected>{*area}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
        </div>

        // Address + coordinates
        <div class="space-y-4 mb-6">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Street address"</label>
                <input
                    type="text"
                    prop:value=move || wizard.get().form.full_address
                    on:input=move |ev| {
                        wizard.update(|w| w.form.full_address = event_target_value(&ev));
                        save_debounced();
                    }
                    placeholder="Street, building, landmark..."
                    class=input_class(false)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "Additional directions"
                </label>
                <input
                    type="text"
                    prop:value=move || wizard.get().form.detailed_address
                    on:input=move |ev| {
                        wizard.update(|w| w.form.detailed_address = event_target_value(&ev));
                        save_debounced();
                    }
                    placeholder="Gate color, floor, nearby shops..."
                    class=input_class(false)
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">
                        "Latitude (optional)"
                    </label>
                    <input
                        type="text"
                        prop:value=move || {
                            wizard
                                .get()
                                .form
                                .coordinates
                                .map(|(lat, _)| lat.to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let lat = event_target_value(&ev).parse::<f64>().ok();
                            wizard.update(|w| {
                                w.form.coordinates = match (lat, w.form.coordinates) {
                                    (Some(lat), Some((_, lng))) => Some((lat, lng)),
                                    (Some(lat), None) => Some((lat, 0.0)),
                                    (None, _) => None,
                                };
                            });
                            save_now();
                        }
                        placeholder="-1.2921"
                        class=input_class(false)
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">
                        "Longitude (optional)"
                    </label>
                    <input
                        type="text"
                        prop:value=move || {
                            wizard
                                .get()
                                .form
                                .coordinates
                                .map(|(_, lng)| lng.to_string())
                                .unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let lng = event_target_value(&ev).parse::<f64>().ok();
                            wizard.update(|w| {
                                w.form.coordinates = match (lng, w.form.coordinates) {
                                    (Some(lng), Some((lat, _))) => Some((lat, lng)),
                                    (Some(lng), None) => Some((0.0, lng)),
                                    (None, _) => None,
                                };
                            });
                            save_now();
                        }
                        placeholder="36.8219"
                        class=input_class(false)
                    />
                </div>
            </div>
        </div>

        // Service radius
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">
                "Service coverage radius *"
            </label>
            <select
                on:change=move |ev| {
                    let radius = ServiceRadius::from_value(&event_target_value(&ev));
                    wizard.update(|w| w.form.service_radius = radius);
                    save_now();
                }
                class=select_class
            >
                <option value="" selected=move || wizard.get().form.service_radius.is_none()>
                    "Select coverage"
                </option>
                {ServiceRadius::OPTIONS
                    .into_iter()
                    .map(|radius| {
                        let value = radius.as_value();
                        let label = match radius {
                            ServiceRadius::Km(km) => format!("Within {km} km"),
                            ServiceRadius::County => "Entire county".to_string(),
                            ServiceRadius::Region => "Entire region".to_string(),
                        };
                        view! {
                            <option
                                value=value
                                selected=move || wizard.get().form.service_radius == Some(radius)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <p class="text-sm text-gray-500 mt-2">
                {move || {
                    wizard
                        .get()
                        .form
                        .service_radius
                        .map(|r| r.coverage_text())
                        .unwrap_or_default()
                }}
            </p>
        </div>
    }
}

/// Step 4: hourly rate range with live preview
#[component]
fn RatesStep(wizard: RwSignal<Wizard>, save_debounced: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Your Rates"</h3>

        <div class="grid grid-cols-2 gap-4 mb-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "Minimum rate (KSH/hr)"
                </label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || {
                        wizard.get().form.min_rate.map(|r| r.to_string()).unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<u32>().ok();
                        wizard.update(|w| w.form.min_rate = value);
                        save_debounced();
                    }
                    class=input_class(false)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "Maximum rate (KSH/hr)"
                </label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || {
                        wizard.get().form.max_rate.map(|r| r.to_string()).unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<u32>().ok();
                        wizard.update(|w| w.form.max_rate = value);
                        save_debounced();
                    }
                    class=input_class(false)
                />
            </div>
        </div>

        <p class="text-sm text-gray-600 mb-6">
            "Clients will see: "
            <span class="font-semibold">
                {move || {
                    let form = wizard.get().form;
                    let min = form.min_rate.map(|r| r.to_string()).unwrap_or_else(|| "XXX".into());
                    let max = form.max_rate.map(|r| r.to_string()).unwrap_or_else(|| "XXX".into());
                    format!("KSH {min} - {max} per hour")
                }}
            </span>
        </p>

        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">"Pricing notes"</label>
            <textarea
                rows="2"
                prop:value=move || wizard.get().form.pricing_notes
                on:input=move |ev| {
                    wizard.update(|w| w.form.pricing_notes = event_target_value(&ev));
                    save_debounced();
                }
                placeholder="e.g. Call-out fee, materials charged separately..."
                class=input_class(false)
            ></textarea>
        </div>
    }
}

/// Notice shown to users who are already providers
#[component]
fn AlreadyProviderNotice() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-8 text-center max-w-md mx-auto">
            <div class="text-4xl mb-4">"✓"</div>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Already a Provider!"</h2>
            <p class="text-gray-600 mb-6">
                "You're already registered as a service provider on our platform."
            </p>
            <div class="space-y-3">
                <a
                    href="/provider-dashboard"
                    class="block w-full bg-indigo-600 hover:bg-indigo-700 text-white py-2 px-4 rounded-md text-sm font-medium"
                >
                    "Go to Your Dashboard"
                </a>
                <a
                    href="/"
                    class="block w-full border border-gray-300 text-gray-700 py-2 px-4 rounded-md text-sm font-medium hover:bg-gray-50"
                >
                    "Back to Home"
                </a>
            </div>
            <div class="mt-6 p-4 bg-blue-50 rounded-lg text-xs text-gray-600 text-left">
                <strong>"Need multiple service profiles?"</strong>
                " For now, you can add different service categories in your dashboard."
            </div>
        </div>
    }
}

/// Distinct confirmation for the client-to-provider account upgrade, with
/// a ten-second auto-redirect
#[component]
fn TransitionModal(redirect: RwSignal<Option<String>>) -> impl IntoView {
    let countdown = RwSignal::new(10u8);
    let ticker = StoredValue::new_local(Option::<Interval>::None);

    Effect::new(move |_| {
        let Some(target) = redirect.get() else {
            ticker.set_value(None);
            return;
        };
        countdown.set(10);
        ticker.set_value(Some(Interval::new(1_000, move || {
            let remaining = countdown.get_untracked();
            if remaining <= 1 {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&target);
                }
            } else {
                countdown.set(remaining - 1);
            }
        })));
    });

    view! {
        <Show when=move || redirect.get().is_some()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg shadow-xl max-w-md w-full p-8 text-center">
                    <div class="mx-auto w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mb-6">
                        <span class="text-green-600 text-2xl">"✓"</span>
                    </div>
                    <h3 class="text-2xl font-semibold text-gray-900 mb-4">
                        "Account Upgraded to Provider!"
                    </h3>
                    <div class="text-left bg-gray-50 p-4 rounded-lg mb-6 text-sm text-gray-600">
                        <ul class="space-y-1">
                            <li>"• Your provider application was submitted successfully"</li>
                            <li>"• Your account type has been upgraded to \"Provider\""</li>
                            <li>"• Your login credentials remain the same"</li>
                            <li>"• You now have access to the provider dashboard"</li>
                        </ul>
                    </div>
                    <button
                        on:click=move |_| {
                            if let Some(target) = redirect.get_untracked() {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href(&target);
                                }
                            }
                        }
                        class="w-full bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-3 rounded-lg font-medium mb-3"
                    >
                        "Go to Provider Dashboard"
                    </button>
                    <p class="text-xs text-gray-500">
                        {move || format!("Redirecting automatically in {} seconds...", countdown.get())}
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// Generic success confirmation (no account transition)
#[component]
fn SuccessModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg shadow-xl max-w-md w-full p-8 text-center">
                    <div class="text-4xl mb-4">"🎉"</div>
                    <h3 class="text-2xl font-semibold text-gray-900 mb-4">
                        "Application Submitted!"
                    </h3>
                    <p class="text-gray-600 mb-6">
                        "We'll review your application and get back to you soon."
                    </p>
                    <a
                        href="/"
                        class="block w-full bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-3 rounded-lg font-medium"
                    >
                        "Back to Home"
                    </a>
                </div>
            </div>
        </Show>
    }
}
