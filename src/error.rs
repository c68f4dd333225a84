//! Error types for the Shortcut client

use thiserror::Error;

/// Prefix carried by deserialization errors raised from the timestamp
/// helpers in [`crate::types::datetime`]. Used to tell a malformed date
/// apart from any other shape mismatch.
pub(crate) const MALFORMED_TIMESTAMP: &str = "malformed timestamp";

/// Errors returned by [`crate::ShortcutClient`] and the model layer
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// HTTP 401 or 403
    #[error("Unauthorized (status {status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// HTTP 404
    #[error("Resource not found: {body}")]
    NotFound { body: String },

    /// HTTP 400/422, or an argument rejected before any request was sent
    /// (`status` is `None` in that case)
    #[error("{}", validation_message(.status, .detail, .body))]
    ValidationFailed {
        status: Option<u16>,
        detail: Option<String>,
        body: String,
    },

    /// HTTP 429
    #[error("Rate limited by Shortcut API: {body}")]
    RateLimited { body: String },

    /// HTTP 5xx
    #[error("Shortcut API server error (status {status}): {body}")]
    ServerError { status: u16, body: String },

    /// Any other non-2xx status
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Connection, DNS or timeout failure before a status was obtained
    #[error("HTTP transport failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Response body did not match the expected record shape
    #[error("Response does not match schema: {message}")]
    SchemaMismatch { message: String, body: String },

    /// A date or date-time field could not be parsed
    #[error("Malformed timestamp in response: {message}")]
    MalformedTimestamp { message: String, body: String },

    /// An input record could not be encoded as JSON
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid construction-time configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShortcutError {
    /// Maps a non-2xx response to the matching error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized { status, body },
            404 => Self::NotFound { body },
            400 | 422 => Self::ValidationFailed {
                status: Some(status),
                detail: error_detail(&body),
                body,
            },
            429 => Self::RateLimited { body },
            500..=599 => Self::ServerError { status, body },
            _ => Self::UnexpectedStatus { status, body },
        }
    }

    /// Classifies a deserialization failure of `body`.
    pub fn from_decode(err: serde_json::Error, body: impl Into<String>) -> Self {
        let message = err.to_string();
        if message.starts_with(MALFORMED_TIMESTAMP) {
            Self::MalformedTimestamp {
                message,
                body: body.into(),
            }
        } else {
            Self::SchemaMismatch {
                message,
                body: body.into(),
            }
        }
    }

    /// Replaces the body attached to a decode failure with `raw`.
    pub(crate) fn with_raw_body(self, raw: String) -> Self {
        match self {
            Self::SchemaMismatch { message, .. } => Self::SchemaMismatch { message, body: raw },
            Self::MalformedTimestamp { message, .. } => Self::MalformedTimestamp { message, body: raw },
            other => other,
        }
    }

    pub(crate) fn invalid_argument(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::ValidationFailed {
            status: None,
            body: detail.clone(),
            detail: Some(detail),
        }
    }

    /// HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::ServerError { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ValidationFailed { status, .. } => *status,
            Self::TransportFailure(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, if the error came from a response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { body, .. }
            | Self::NotFound { body }
            | Self::ValidationFailed { body, .. }
            | Self::RateLimited { body }
            | Self::ServerError { body, .. }
            | Self::UnexpectedStatus { body, .. }
            | Self::SchemaMismatch { body, .. }
            | Self::MalformedTimestamp { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn validation_message(status: &Option<u16>, detail: &Option<String>, body: &str) -> String {
    let reason = detail.as_deref().unwrap_or(body);
    match status {
        Some(status) => format!("Validation failed (status {status}): {reason}"),
        None => format!("Validation failed: {reason}"),
    }
}

/// Pulls a human readable message out of a Shortcut error body.
///
/// Shortcut answers 400s with `{"message": "...", "errors": {...}}`; older
/// endpoints use `error`.
fn error_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .or_else(|| json.get("error"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ShortcutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ShortcutError::from_status(401, String::new()),
            ShortcutError::Unauthorized { status: 401, .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(403, String::new()),
            ShortcutError::Unauthorized { status: 403, .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(404, String::new()),
            ShortcutError::NotFound { .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(422, String::new()),
            ShortcutError::ValidationFailed { status: Some(422), .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(429, String::new()),
            ShortcutError::RateLimited { .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(503, String::new()),
            ShortcutError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            ShortcutError::from_status(409, String::new()),
            ShortcutError::UnexpectedStatus { status: 409, .. }
        ));
    }

    #[test]
    fn test_status_preserved() {
        assert_eq!(ShortcutError::from_status(429, String::new()).status(), Some(429));
        assert_eq!(ShortcutError::from_status(502, String::new()).status(), Some(502));
        assert_eq!(ShortcutError::from_status(404, String::new()).status(), Some(404));
        assert_eq!(ShortcutError::invalid_argument("bad").status(), None);
    }

    #[test]
    fn test_validation_detail_extracted() {
        let body = r#"{"message":"Name can't be blank","errors":{}}"#.to_string();
        match ShortcutError::from_status(400, body.clone()) {
            ShortcutError::ValidationFailed { detail, body: raw, .. } => {
                assert_eq!(detail.as_deref(), Some("Name can't be blank"));
                assert_eq!(raw, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_detail_absent_for_plain_body() {
        match ShortcutError::from_status(400, "bad request".to_string()) {
            ShortcutError::ValidationFailed { detail, .. } => assert!(detail.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_raw_body_replaces_decode_body_only() {
        let parse_err = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = ShortcutError::from_decode(parse_err, "{}").with_raw_body("{ }".to_string());
        assert_eq!(err.body(), Some("{ }"));

        let err = ShortcutError::from_status(404, "gone".to_string()).with_raw_body("other".to_string());
        assert_eq!(err.body(), Some("gone"));
    }

    #[test]
    fn test_body_exposed() {
        let err = ShortcutError::from_status(500, "boom".to_string());
        assert_eq!(err.body(), Some("boom"));
        assert!(err.to_string().contains("500"));
    }
}
