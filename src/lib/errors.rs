//! Error types shared by the HTTP helpers and the screens, plus the explicit
//! schema for backend failure payloads. Screens surface exactly one message
//! per failed attempt; everything unrecognized falls back to a generic string.

use serde::Deserialize;
use std::fmt;

/// Fallback shown when a failure body carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Returns the message a screen should show the user.
    /// HTTP failures already carry the extracted backend message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Http { message, .. } => message.clone(),
            AppError::Parse(_) | AppError::Serialization(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Failure payload shape expected from the backend. Anything that does not
/// parse against this schema is treated as message-less.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

/// Extracts the user-facing message from a failure body, falling back to
/// [`GENERIC_ERROR_MESSAGE`] when the body is empty, unparseable, or carries
/// no message field.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::{AppError, GENERIC_ERROR_MESSAGE, error_message_from_body};

    #[test]
    fn extracts_backend_message() {
        let body = r#"{"message":"Email already registered"}"#;
        assert_eq!(error_message_from_body(body), "Email already registered");
    }

    #[test]
    fn trims_backend_message() {
        let body = r#"{"message":"  token expired  "}"#;
        assert_eq!(error_message_from_body(body), "token expired");
    }

    #[test]
    fn falls_back_on_missing_message() {
        assert_eq!(
            error_message_from_body(r#"{"statusCode":500}"#),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            error_message_from_body(r#"{"message":""}"#),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            error_message_from_body(r#"{"message":null}"#),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn falls_back_on_unparseable_body() {
        assert_eq!(error_message_from_body(""), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            error_message_from_body("<html>502 Bad Gateway</html>"),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn user_message_prefers_http_payload_message() {
        let err = AppError::Http {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Email already registered");

        let err = AppError::Parse("bad json".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
