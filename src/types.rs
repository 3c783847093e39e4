//! API types matching the FundiLink backend

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Authentication response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Client,
    Provider,
}

/// Current user record, persisted alongside the auth token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_user_type")]
    pub user_type: UserType,
}

fn default_user_type() -> UserType {
    UserType::Client
}

impl User {
    pub fn is_provider(&self) -> bool {
        self.user_type == UserType::Provider
    }
}

/// Problem detection request (JSON variant; the multipart variant carries
/// the same fields plus image files)
#[derive(Debug, Clone, Serialize)]
pub struct DetectRequest {
    pub description: String,
    pub selected_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub images: Vec<String>,
}

/// Urgency classification returned by the detect endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Emergency,
}

impl UrgencyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
            UrgencyLevel::Emergency => "Emergency",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UrgencyLevel::Emergency => "bg-red-100 text-red-800 border-red-200",
            UrgencyLevel::High => "bg-orange-100 text-orange-800 border-orange-200",
            UrgencyLevel::Medium => "bg-yellow-100 text-yellow-800 border-yellow-200",
            UrgencyLevel::Low => "bg-green-100 text-green-800 border-green-200",
        }
    }
}

/// Result of one problem-detection call; read-only afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub session_id: String,
    pub ai_suggested_category: String,
    pub confidence: f64,
    pub final_category: String,
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub keywords_matched: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Provider search request body
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSearchRequest {
    pub category: String,
    pub max_distance: f64,
    pub min_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
}

/// Typical response-time commitment of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTime {
    SameDay,
    Within48h,
    WithinWeek,
    #[serde(other)]
    Unknown,
}

impl ResponseTime {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseTime::SameDay => "Same Day Response",
            ResponseTime::Within48h => "Within 2 Days",
            ResponseTime::WithinWeek => "Within a Week",
            ResponseTime::Unknown => "Contact for Availability",
        }
    }

    /// Wire value sent in the application form
    pub fn as_value(&self) -> &'static str {
        match self {
            ResponseTime::SameDay => "same_day",
            ResponseTime::Within48h => "within_48h",
            ResponseTime::WithinWeek => "within_week",
            ResponseTime::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "same_day" => Some(ResponseTime::SameDay),
            "within_48h" => Some(ResponseTime::Within48h),
            "within_week" => Some(ResponseTime::WithinWeek),
            _ => None,
        }
    }
}

/// One provider in a search result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub id: i64,
    pub name: String,
    pub business_name: String,
    pub phone: String,
    pub distance_km: f64,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub hourly_rate_min: f64,
    pub hourly_rate_max: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub response_time: ResponseTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub primary_location: String,
}

/// Message sender side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Provider,
}

/// One chat message as returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_type: SenderType,
    pub sender_name: String,
    pub message_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Chat send request
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub provider_id: i64,
    pub message_text: String,
    pub session_id: String,
}

/// Review submission
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub provider_id: i64,
    pub rating: u8,
    pub comment: Option<String>,
}

/// Client dashboard stat card values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    #[serde(default)]
    pub active_requests: u32,
    #[serde(default)]
    pub active_chats: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total_spent: f64,
}

/// Provider dashboard stat card values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStats {
    #[serde(default)]
    pub new_requests: u32,
    #[serde(default)]
    pub active_chats: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub completed_jobs: u32,
}

/// A provider that responded to a service request
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

/// One service request in a dashboard list
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRequestSummary {
    pub id: i64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub provider_count: u32,
    #[serde(default)]
    pub provider_responses: Vec<ProviderResponse>,
}

/// One conversation in a dashboard list
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationSummary {
    pub id: i64,
    /// Counterpart display name (provider name on the client dashboard,
    /// client name on the provider dashboard)
    #[serde(alias = "provider_name", alias = "client_name")]
    pub counterpart_name: String,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub last_message_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub service_category: String,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub provider_id: Option<i64>,
}

/// One entry in the client activity feed
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Provider profile, editable from the provider dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub min_rate: Option<f64>,
    #[serde(default)]
    pub max_rate: Option<f64>,
    #[serde(default)]
    pub pricing_notes: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
    #[serde(default)]
    pub service_radius: Option<String>,
}

/// Offered-services update for the provider dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderServices {
    pub service_ids: Vec<String>,
}

/// Response of the provider application endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub user_transition: bool,
    #[serde(default)]
    pub user_data: Option<User>,
    #[serde(default)]
    pub redirect_to: Option<String>,
}

/// A search deferred because the user was not authenticated; replayed
/// exactly once after login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSearch {
    pub detection: DetectionResult,
    pub description: String,
    pub category: String,
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_round_trips_lowercase() {
        let level: UrgencyLevel = serde_json::from_str("\"emergency\"").unwrap();
        assert_eq!(level, UrgencyLevel::Emergency);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"emergency\"");
    }

    #[test]
    fn unknown_response_time_falls_back() {
        let rt: ResponseTime = serde_json::from_str("\"next_month\"").unwrap();
        assert_eq!(rt, ResponseTime::Unknown);
        assert_eq!(ResponseTime::from_value("within_48h"), Some(ResponseTime::Within48h));
        assert_eq!(ResponseTime::from_value("bogus"), None);
    }

    #[test]
    fn conversation_accepts_either_counterpart_field() {
        let client_side: ConversationSummary = serde_json::from_str(
            r#"{"id":1,"provider_name":"Jane","last_message":"hi","service_category":"plumbing","unread_count":2}"#,
        )
        .unwrap();
        assert_eq!(client_side.counterpart_name, "Jane");

        let provider_side: ConversationSummary =
            serde_json::from_str(r#"{"id":2,"client_name":"Otieno"}"#).unwrap();
        assert_eq!(provider_side.counterpart_name, "Otieno");
    }

    #[test]
    fn pending_search_round_trips_through_json() {
        let pending = PendingSearch {
            detection: DetectionResult {
                session_id: "abc123".into(),
                ai_suggested_category: "plumbing".into(),
                confidence: 0.91,
                final_category: "plumbing".into(),
                urgency_level: UrgencyLevel::High,
                keywords_matched: vec!["leak".into()],
                next_steps: vec!["Shut off the mains".into()],
            },
            description: "water everywhere".into(),
            category: "plumbing".into(),
            session_id: Some("abc123".into()),
        };
        let json = serde_json::to_string(&pending).unwrap();
        let restored: PendingSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.category, "plumbing");
        assert_eq!(restored.detection.urgency_level, UrgencyLevel::High);
        assert_eq!(restored.session_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn user_type_defaults_to_client() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"A","email":"a@b.co"}"#).unwrap();
        assert_eq!(user.user_type, UserType::Client);
        assert!(!user.is_provider());
    }
}
