//! Provider result card

use leptos::prelude::*;

use crate::types::ProviderSummary;

/// Distance for display: metres under a kilometre, otherwise one decimal
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m away", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{distance_km:.1}km away")
    }
}

/// One provider in the results grid with call/chat/rate actions
#[component]
pub fn ProviderCard(
    provider: ProviderSummary,
    on_chat: Callback<(i64, String)>,
    on_rate: Callback<(i64, String)>,
) -> impl IntoView {
    let chat_target = (provider.id, provider.name.clone());
    let rate_target = (provider.id, provider.name.clone());
    let phone_href = format!("tel:{}", provider.phone);
    let specialties = provider.specialties.iter().take(3).cloned().collect::<Vec<_>>();

    view! {
        <div class="bg-white border border-gray-200 rounded-lg p-6 shadow-md hover:shadow-lg transition-shadow">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h4 class="text-lg font-semibold text-gray-900">{provider.name.clone()}</h4>
                    <p class="text-sm text-gray-600">{provider.business_name.clone()}</p>
                </div>
                <div class="flex items-center">
                    <span class="text-yellow-400 mr-1">"★"</span>
                    <span class="text-sm font-medium text-gray-700">
                        {format!("{:.1}", provider.average_rating)}
                    </span>
                    <span class="text-xs text-gray-500 ml-1">
                        {format!("({})", provider.total_reviews)}
                    </span>
                </div>
            </div>

            <div class="space-y-2 mb-4 text-sm text-gray-600">
                <p>
                    "📍 " {format_distance(provider.distance_km)}
                    {(!provider.primary_location.is_empty())
                        .then(|| format!(" • {}", provider.primary_location))}
                </p>
                <p>"🕐 " {provider.response_time.label()}</p>
                <p>
                    {format!(
                        "💰 KSH {:.0}-{:.0}/hr",
                        provider.hourly_rate_min, provider.hourly_rate_max
                    )}
                </p>
            </div>

            <Show when={
                let has_specialties = !specialties.is_empty();
                move || has_specialties
            }>
                <div class="mb-4">
                    <p class="text-xs text-gray-500 mb-2">"Specialties:"</p>
                    <div class="flex flex-wrap gap-1">
                        {specialties
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="inline-flex items-center px-2 py-1 rounded-full text-xs font-medium bg-indigo-100 text-indigo-800">
                                        {s.clone()}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>

            <Show when={
                let has_description = !provider.description.is_empty();
                move || has_description
            }>
                <p class="text-sm text-gray-600 line-clamp-2 mb-4">{provider.description.clone()}</p>
            </Show>

            <div class="flex space-x-2">
                <a
                    href=phone_href
                    class="flex-1 text-center bg-green-600 hover:bg-green-700 text-white py-2 px-4 rounded-md text-sm font-medium transition-colors"
                >
                    "📞 Call"
                </a>
                <button
                    on:click=move |_| on_chat.run(chat_target.clone())
                    class="flex-1 bg-indigo-600 hover:bg-indigo-700 text-white py-2 px-4 rounded-md text-sm font-medium transition-colors"
                >
                    "💬 Chat"
                </button>
                <button
                    on:click=move |_| on_rate.run(rate_target.clone())
                    class="bg-yellow-500 hover:bg-yellow-600 text-white py-2 px-3 rounded-md text-sm font-medium transition-colors"
                >
                    "★"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_distance;

    #[test]
    fn short_distances_render_in_metres() {
        assert_eq!(format_distance(0.4), "400m away");
        assert_eq!(format_distance(0.999), "999m away");
    }

    #[test]
    fn longer_distances_render_in_kilometres() {
        assert_eq!(format_distance(1.0), "1.0km away");
        assert_eq!(format_distance(12.34), "12.3km away");
    }
}
