//! Client Error Types
//!
//! - `ClientError` - everything an API call or view action can fail with
//! - `RefreshError` - outcome of a failed token reissue; `Clone` because one
//!   failure is handed to every request waiting on the same refresh
//! - `StorageError` - persistent key-value store failures

use crate::shared::SharedError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (DNS, connect, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Request failed: {status} - {message}")]
    Status {
        status: StatusCode,
        /// Server-provided message, or the status reason
        message: String,
    },

    /// Still 401 after a successful token refresh
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated call attempted without a stored token
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Response body did not match the expected schema
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Token refresh failed: {0}")]
    Refresh(#[from] RefreshError),

    #[error(transparent)]
    Storage(#[from] StorageError),


    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error(transparent)]
    Config(#[from] crate::shared::ConfigError),
}

impl ClientError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    /// Whether the session is gone and the user must sign in again
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NotAuthenticated | Self::Refresh(_)
        )
    }

    /// Short message suitable for a status banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::Status { status, message } => match status.as_u16() {
                403 => "You do not have permission to do that.".to_string(),
                404 => "The requested item no longer exists.".to_string(),
                409 => "That item already exists.".to_string(),
                _ if message.is_empty() => format!("Request failed ({})", status),
                _ => message.clone(),
            },
            Self::Unauthorized | Self::NotAuthenticated | Self::Refresh(_) => {
                "Your session has expired. Please sign in again.".to_string()
            }
            Self::Shared(SharedError::ValidationError { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// `/reissue` answered with something other than 200
    #[error("reissue rejected with status {status}")]
    Rejected { status: u16 },

    #[error("reissue network error: {0}")]
    Network(String),

    /// 200 but no token in header or body
    #[error("reissue response carried no access token")]
    MissingToken,

    /// The caller driving the refresh was dropped before it finished
    #[error("refresh abandoned before completion")]
    Abandoned,

    /// The session was cleared while the request was in flight
    #[error("session ended before refresh")]
    SignedOut,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}
