//! Shared Module
//!
//! Types shared by every part of the client: server payloads, realtime event
//! frames, configuration and the common error type. Nothing in here performs
//! I/O.

/// Server payloads (DTOs)
pub mod models;

/// Realtime QnA events
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use event::QnaDelta;
