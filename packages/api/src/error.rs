//! # Error bodies returned by the servers
//!
//! The servers report failures in exactly two JSON shapes:
//!
//! | Shape | Example | Variant |
//! |-------|---------|---------|
//! | single message | `{"error": "Post not found."}` | [`ApiError::Message`] |
//! | per-field messages | `{"username": [{"message": "...", "code": "invalid"}]}` | [`ApiError::Fields`] |
//!
//! Failures that never reached the server, or bodies in neither shape, map to
//! [`ApiError::Transport`] and [`ApiError::Decode`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Message(String),
    #[error("{}", .0.summary())]
    Fields(FieldErrors),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        ApiError::Message(message.into())
    }

    /// Interpret the body of a non-success response.
    pub fn from_body(body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
            return ApiError::Message(error);
        }
        match serde_json::from_str::<FieldErrors>(body) {
            Ok(fields) if !fields.is_empty() => ApiError::Fields(fields),
            _ => ApiError::Decode(body.chars().take(200).collect()),
        }
    }

    /// First message for `field` when this is a per-field error.
    pub fn field(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Fields(fields) => fields.first(field),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// One validation message for a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub message: String,
    #[serde(default)]
    pub code: String,
}

/// Field name to validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldMessage>>);

impl FieldErrors {
    /// Bucket for errors not tied to a single field (e.g. password mismatch).
    pub const NON_FIELD: &'static str = "__all__";

    pub fn new() -> Self {
        Self::default()
    }

    /// A single message in the non-field bucket.
    pub fn non_field(message: impl Into<String>) -> Self {
        Self::new().with(Self::NON_FIELD, message, "invalid")
    }

    pub fn with(mut self, field: &str, message: impl Into<String>, code: &str) -> Self {
        self.push(field, message, code);
        self
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>, code: &str) {
        self.0.entry(field.to_string()).or_default().push(FieldMessage {
            message: message.into(),
            code: code.to_string(),
        });
    }

    /// Only the first message per field is ever displayed.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(|m| m.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    fn summary(&self) -> String {
        self.0
            .values()
            .filter_map(|messages| messages.first())
            .map(|m| m.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
