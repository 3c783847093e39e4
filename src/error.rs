//! Error taxonomy for everything that can go wrong between the UI and the
//! backend. Nothing here is fatal to the page: callers map each variant to
//! a toast, an inline message, or the sign-in prompt.

use serde::Deserialize;
use thiserror::Error;

/// A single field error from a structured 422 response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl FieldError {
    /// Dotted field path, e.g. `body.minRate`
    pub fn field(&self) -> String {
        self.loc
            .iter()
            .map(|part| match part {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Caught before any network call; rendered inline, never sent
    #[error("{0}")]
    Validation(String),

    /// 401/403, or an unauthenticated attempt at a protected action
    #[error("You need to sign in to continue")]
    AuthRequired,

    /// 4xx with a `detail` body; the message is surfaced verbatim
    #[error("{detail}")]
    Rejected {
        detail: String,
        fields: Vec<FieldError>,
    },

    /// Network failure or an unexpected status; generic retry message
    #[error("Something went wrong. Please try again.")]
    Network(String),
}

impl ApiError {
    pub fn rejected(detail: impl Into<String>) -> Self {
        ApiError::Rejected {
            detail: detail.into(),
            fields: Vec::new(),
        }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::AuthRequired)
    }

    /// Message suitable for showing to the user. Network details stay in
    /// the log, not the toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Error body shapes the backend produces: a plain `detail` string for
/// most 4xx, or a list of field errors for 422
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

impl ErrorBody {
    /// Collapse into an [`ApiError::Rejected`]
    pub fn into_error(self) -> ApiError {
        match self.detail {
            ErrorDetail::Message(detail) => ApiError::rejected(detail),
            ErrorDetail::Fields(fields) => {
                let detail = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field(), f.msg))
                    .collect::<Vec<_>>()
                    .join("\n");
                ApiError::Rejected { detail, fields }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_detail_becomes_rejected() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"No providers in this area"}"#).unwrap();
        let err = body.into_error();
        assert_eq!(err.user_message(), "No providers in this area");
    }

    #[test]
    fn field_list_is_flattened() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","minRate"],"msg":"must be positive"},
                          {"loc":["body","phone"],"msg":"invalid phone"}]}"#,
        )
        .unwrap();
        let err = body.into_error();
        match &err {
            ApiError::Rejected { detail, fields } => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field(), "body.minRate");
                assert!(detail.contains("body.phone: invalid phone"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn network_message_is_generic() {
        let err = ApiError::Network("dns lookup failed".into());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
