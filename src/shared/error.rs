//! Shared Error Types
//!
//! Errors that can occur both at the network boundary (decoding server
//! payloads) and in client-side form handling.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Form field validation failures
//! - `PayloadError` - A server payload did not have the expected shape
//!
//! # Usage
//!
//! ```rust
//! use routine_hub::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! assert_eq!(error.field(), Some("title"));
//! ```
use thiserror::Error;

/// Error types shared by every layer of the client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Form validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Unexpected payload shape
    #[error("Payload error: {message}")]
    PayloadError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload(message: impl Into<String>) -> Self {
        Self::PayloadError {
            message: message.into(),
        }
    }

    /// Field name for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
