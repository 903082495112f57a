use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call, classified by status but never
/// reinterpreted: the server's own `detail` text travels through
/// unchanged so the page that owns the call can show it verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response ({0}): {1}")]
    Unexpected(StatusCode, String),
}

/// Maximum length for raw response bodies carried in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error payload shape used by the backend
#[derive(Deserialize)]
struct ErrorPayload {
    detail: String,
}

impl ApiError {
    /// Pull the backend's `detail` field out of an error body, if the
    /// body is that shape.
    fn detail_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .map(|p| p.detail)
    }

    /// Truncate a raw body so error messages stay readable
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = Self::detail_from_body(body).unwrap_or_else(|| Self::truncate_body(body));
        let message = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            message
        };

        match status.as_u16() {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::Unexpected(status, message),
        }
    }
}
