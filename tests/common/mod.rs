//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A wiremock-backed backend with an `AppState` pointed at it
//! - JSON fixtures for server payloads
//! - Custom assertion macros


// Re-export commonly used utilities
pub use mock_backend::*;
