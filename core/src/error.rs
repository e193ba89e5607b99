//! Error types for the Firebase client.
//!
//! # Design
//! Every outcome that is not a decoded `DynamicLink` is an `Error` value.
//! Failures reported by the API, or that stand in for an API report
//! (transport failure, unreadable error body), are normalized into
//! `FirebaseError` so callers can match on one shape. A 200 response whose
//! body does not fit the expected schema is kept apart in `Error::Schema`:
//! that is a contract mismatch, not an API error.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors returned by the transport adapter and the routes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API rejected the call, or the call failed before a readable
    /// answer came back.
    #[error(transparent)]
    Firebase(#[from] FirebaseError),

    /// A 200 response body did not match the expected schema.
    #[error("response body does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),

    /// A 200 response body exceeded the configured size bound.
    #[error("response body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// The request failed local validation and was never sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// The normalized API error, if this is one.
    pub fn as_firebase(&self) -> Option<&FirebaseError> {
        match self {
            Error::Firebase(err) => Some(err),
            _ => None,
        }
    }
}

/// Normalized failure outcome of an API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FirebaseError {
    /// Decoded from the vendor error envelope.
    #[error("{0}")]
    Api(FirebaseApiError),

    /// Synthesized locally: transport failure or an error body that could
    /// not be decoded.
    #[error("firebase error -1: {message}")]
    Unknown { message: String },
}

impl FirebaseError {
    pub fn unknown(message: impl Into<String>) -> Self {
        FirebaseError::Unknown {
            message: message.into(),
        }
    }

    pub fn code(&self) -> FirebaseErrorCode {
        match self {
            FirebaseError::Api(err) => err.code,
            FirebaseError::Unknown { .. } => FirebaseErrorCode::Unknown,
        }
    }

    /// Numeric code as a string, for programmatic matching.
    pub fn identifier(&self) -> String {
        self.code().as_i32().to_string()
    }

    pub fn reason(&self) -> &str {
        match self {
            FirebaseError::Api(err) => &err.message,
            FirebaseError::Unknown { message } => message,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            FirebaseError::Api(err) => err.status.as_deref(),
            FirebaseError::Unknown { .. } => None,
        }
    }
}

/// Body of the vendor error envelope `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseApiError {
    pub code: FirebaseErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl fmt::Display for FirebaseApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "firebase error {}: {}", self.code.as_i32(), self.message)
    }
}

/// The envelope itself, as returned on non-200 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: FirebaseApiError,
}

/// Known vendor error codes. Anything not in the table decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirebaseErrorCode {
    PermissionDenied,
    Unknown,
}

impl FirebaseErrorCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            403 => FirebaseErrorCode::PermissionDenied,
            _ => FirebaseErrorCode::Unknown,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            FirebaseErrorCode::PermissionDenied => 403,
            FirebaseErrorCode::Unknown => -1,
        }
    }
}

impl Serialize for FirebaseErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> Deserialize<'de> for FirebaseErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(FirebaseErrorCode::from_code)
    }
}
