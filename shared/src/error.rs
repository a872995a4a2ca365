//! Error types shared by every client surface.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

/// Failure of one API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the error body, when present.
        message: Option<String>,
    },
    /// A 2xx body could not be decoded.
    #[error("parse error: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("serialize error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Server-provided message, if the server sent a non-blank one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// User-facing text: the server message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Tagged failure returned by session actions instead of an error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionFailure {
    /// Message ready to show the user.
    pub message: String,
}

/// Field-scoped validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the message for `field`, typically when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Message for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether `field` has a message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_or_prefers_non_blank_server_message() {
        let with_message = ApiError::Status {
            status: 400,
            message: Some("Title already exists".to_string()),
        };
        assert_eq!(with_message.message_or("fallback"), "Title already exists");

        let blank = ApiError::Status {
            status: 400,
            message: Some("   ".to_string()),
        };
        assert_eq!(blank.message_or("fallback"), "fallback");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or("fallback"), "fallback");
    }

    #[test]
    fn field_errors_clear_single_field() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "too short");
        errors.insert("content", "too short");
        errors.clear("title");
        assert!(!errors.contains("title"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "content: too short");
    }

    #[test]
    fn action_failure_displays_its_message() {
        let failure = ActionFailure {
            message: "Username already taken".to_string(),
        };
        assert_eq!(failure.to_string(), "Username already taken");
        let err: &dyn std::error::Error = &failure;
        assert!(err.source().is_none());
    }
}
