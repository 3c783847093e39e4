//! API client for the FundiLink backend
//!
//! Thin wrappers over `gloo_net` with a single place for auth-header
//! attachment and status-to-error mapping. Protected endpoints take an
//! `Option<&str>` token and surface a missing one as
//! [`ApiError::AuthRequired`] instead of firing a doomed request.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::FormData;

use crate::error::{ApiError, ErrorBody};
use crate::types::*;

fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
        None => builder,
    }
}

fn require(token: Option<&str>) -> Result<&str, ApiError> {
    token.ok_or(ApiError::AuthRequired)
}

async fn handle<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if resp.ok() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("failed to parse response: {e}")));
    }
    if status == 401 || status == 403 {
        return Err(ApiError::AuthRequired);
    }
    if (400..500).contains(&status) {
        if let Ok(body) = resp.json::<ErrorBody>().await {
            return Err(body.into_error());
        }
    }
    Err(ApiError::Network(format!("request failed with status {status}")))
}

/// Like [`handle`] but discards any success body
async fn handle_empty(resp: Response) -> Result<(), ApiError> {
    let status = resp.status();
    if resp.ok() {
        return Ok(());
    }
    if status == 401 || status == 403 {
        return Err(ApiError::AuthRequired);
    }
    if (400..500).contains(&status) {
        if let Ok(body) = resp.json::<ErrorBody>().await {
            return Err(body.into_error());
        }
    }
    Err(ApiError::Network(format!("request failed with status {status}")))
}

async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = bearer(Request::get(url), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle(resp).await
}

async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = bearer(Request::post(url), token)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle(resp).await
}

async fn post_json_empty<B: serde::Serialize>(
    url: &str,
    body: &B,
    token: Option<&str>,
) -> Result<(), ApiError> {
    let resp = bearer(Request::post(url), token)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle_empty(resp).await
}

async fn post_empty(url: &str, token: Option<&str>) -> Result<(), ApiError> {
    let resp = bearer(Request::post(url), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle_empty(resp).await
}

/// Multipart POST; the browser supplies the boundary header
async fn post_form<T: serde::de::DeserializeOwned>(
    url: &str,
    form: &FormData,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = bearer(Request::post(url), token)
        .body(form.clone())
        .map_err(|e| ApiError::Network(format!("failed to build request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle(resp).await
}

// ---------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------

pub async fn login(base: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_json(&format!("{base}/api/users/login"), &body, None).await
}

pub async fn register(base: &str, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_json(&format!("{base}/api/users/register"), body, None).await
}

// ---------------------------------------------------------------------
// Problem detection
// ---------------------------------------------------------------------

pub async fn detect_problem(
    base: &str,
    token: Option<&str>,
    body: &DetectRequest,
) -> Result<DetectionResult, ApiError> {
    post_json(&format!("{base}/api/problems/detect"), body, token).await
}

/// Multipart variant used when the intake form carries image files
pub async fn detect_problem_with_images(
    base: &str,
    token: Option<&str>,
    form: &FormData,
) -> Result<DetectionResult, ApiError> {
    post_form(&format!("{base}/api/problems/detect"), form, token).await
}

// ---------------------------------------------------------------------
// Matching, chat, reviews
// ---------------------------------------------------------------------

pub async fn find_providers(
    base: &str,
    token: Option<&str>,
    body: &ProviderSearchRequest,
) -> Result<Vec<ProviderSummary>, ApiError> {
    let token = require(token)?;
    post_json(&format!("{base}/api/matching/find-providers"), body, Some(token)).await
}

pub async fn chat_messages(
    base: &str,
    token: Option<&str>,
    session_id: &str,
) -> Result<Vec<ChatMessage>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/matching/chat/{session_id}"), Some(token)).await
}

pub async fn send_chat_message(
    base: &str,
    token: Option<&str>,
    body: &SendMessageRequest,
) -> Result<(), ApiError> {
    let token = require(token)?;
    post_json_empty(&format!("{base}/api/matching/chat/send"), body, Some(token)).await
}

pub async fn submit_review(
    base: &str,
    token: Option<&str>,
    body: &ReviewRequest,
) -> Result<(), ApiError> {
    let token = require(token)?;
    post_json_empty(&format!("{base}/api/matching/review"), body, Some(token)).await
}

// ---------------------------------------------------------------------
// Client dashboard
// ---------------------------------------------------------------------

pub async fn client_stats(base: &str, token: Option<&str>) -> Result<ClientStats, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/clients/dashboard/stats"), Some(token)).await
}

pub async fn client_requests(
    base: &str,
    token: Option<&str>,
) -> Result<Vec<ServiceRequestSummary>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/clients/requests"), Some(token)).await
}

pub async fn client_conversations(
    base: &str,
    token: Option<&str>,
) -> Result<Vec<ConversationSummary>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/clients/conversations"), Some(token)).await
}

pub async fn client_activity(
    base: &str,
    token: Option<&str>,
) -> Result<Vec<ActivityItem>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/clients/activity"), Some(token)).await
}

pub async fn cancel_request(base: &str, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    let token = require(token)?;
    post_empty(&format!("{base}/api/clients/requests/{id}/cancel"), Some(token)).await
}

pub async fn start_conversation(
    base: &str,
    token: Option<&str>,
    provider_id: i64,
    request_id: i64,
) -> Result<(), ApiError> {
    let token = require(token)?;
    let body = serde_json::json!({ "provider_id": provider_id, "request_id": request_id });
    post_json_empty(&format!("{base}/api/conversations/start"), &body, Some(token)).await
}

// ---------------------------------------------------------------------
// Provider dashboard
// ---------------------------------------------------------------------

pub async fn provider_stats(base: &str, token: Option<&str>) -> Result<ProviderStats, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/providers/dashboard/stats"), Some(token)).await
}

pub async fn provider_requests(
    base: &str,
    token: Option<&str>,
) -> Result<Vec<ServiceRequestSummary>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/providers/requests"), Some(token)).await
}

pub async fn provider_conversations(
    base: &str,
    token: Option<&str>,
) -> Result<Vec<ConversationSummary>, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/providers/conversations"), Some(token)).await
}

pub async fn accept_request(base: &str, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    let token = require(token)?;
    post_empty(&format!("{base}/api/providers/requests/{id}/accept"), Some(token)).await
}

pub async fn decline_request(base: &str, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    let token = require(token)?;
    post_empty(&format!("{base}/api/providers/requests/{id}/decline"), Some(token)).await
}

pub async fn provider_profile(
    base: &str,
    token: Option<&str>,
) -> Result<ProviderProfile, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/providers/profile"), Some(token)).await
}

pub async fn update_provider_profile(
    base: &str,
    token: Option<&str>,
    profile: &ProviderProfile,
) -> Result<(), ApiError> {
    let token = require(token)?;
    let resp = bearer(Request::put(&format!("{base}/api/providers/profile")), Some(token))
        .header("Content-Type", "application/json")
        .json(profile)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle_empty(resp).await
}

pub async fn provider_services(
    base: &str,
    token: Option<&str>,
) -> Result<ProviderServices, ApiError> {
    let token = require(token)?;
    get_json(&format!("{base}/api/providers/services"), Some(token)).await
}

pub async fn update_provider_services(
    base: &str,
    token: Option<&str>,
    services: &ProviderServices,
) -> Result<(), ApiError> {
    let token = require(token)?;
    let resp = bearer(Request::put(&format!("{base}/api/providers/services")), Some(token))
        .header("Content-Type", "application/json")
        .json(services)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("network error: {e}")))?;
    handle_empty(resp).await
}

// ---------------------------------------------------------------------
// Provider application
// ---------------------------------------------------------------------

pub async fn apply_provider(
    base: &str,
    token: Option<&str>,
    form: &FormData,
) -> Result<ApplyResponse, ApiError> {
    let token = require(token)?;
    post_form(&format!("{base}/api/provider/apply"), form, Some(token)).await
}
