//! Error types for the Tribuna client SDK.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias using the Tribuna Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Body of a non-2xx HTTP response, kept verbatim for the caller.
///
/// The backend reports failures as JSON objects carrying an `error` or
/// `detail` field, but proxies and gateways in front of it may answer with
/// plain text. Both shapes are preserved so no error information is lost
/// between the wire and the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Parsed JSON error payload.
    Json(Value),
    /// Raw text payload (non-JSON content type).
    Text(String),
}

impl ErrorBody {
    /// Extract the backend's human-readable message, if one is present.
    ///
    /// Looks for the `error` and `detail` fields used across the backend's
    /// error responses. Returns `None` for text bodies and for JSON bodies
    /// without either field.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ErrorBody::Json(value) => value
                .get("error")
                .or_else(|| value.get("detail"))
                .and_then(Value::as_str),
            ErrorBody::Text(_) => None,
        }
    }

    /// The JSON payload, if this body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ErrorBody::Json(value) => Some(value),
            ErrorBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{}", value),
            ErrorBody::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Core error type for Tribuna client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (connection, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status. The parsed body is kept
    /// verbatim so callers can surface backend-specific messages.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: ErrorBody },

    /// No usable session: never logged in, or the refresh token was
    /// rejected and the session was reset.
    #[error("Session expired: re-authentication required")]
    AuthExpired,

    /// Malformed input on the client side (filter or mode combination).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payload failed (de)serialization at the transport boundary. The
    /// context names the payload: a response being decoded into its typed
    /// shape, or a request body being serialized for the wire.
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    /// Configuration error (client construction, environment values).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a `Parse` error with the decode context attached.
    pub fn parse(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Error::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// HTTP status code, when this error came from a backend response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided error message, when one exists in the body.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => body.detail(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Transport(format!("Request timed out: {}", e))
        } else {
            Error::Transport(e.to_string())
        }
    }
}
