//! Routine Hub - Client Library
//!
//! Headless client core for the Routine Hub habit-tracking platform: typed
//! access to the REST backend, session handling with single-flight token
//! refresh, persisted client-local state and the realtime QnA support channel.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no I/O
//!   - Server payloads (`Plan`, `Category`, `QnaTicket`, ...)
//!   - Realtime QnA delta frames
//!   - Configuration and the shared error type
//!
//! - **`client`** - Everything that talks to the outside world
//!   - `ApiClient` HTTP wrapper and the endpoint families under `api`
//!   - `Session` and `TokenRefresher` (one reissue call per expiry, however
//!     many requests observed it)
//!   - Key-value storage, category cache and recent-search history
//!   - Feature view-models (`views`) and the QnA broker channel (`realtime`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use routine_hub::client::{AppState, Config, MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), routine_hub::client::ClientError> {
//! let state = AppState::new(Config::new()?, Arc::new(MemoryStore::new()))?;
//! state.auth().login("runner@example.com", "hunter22").await?;
//! let plans = state.plans().default_list().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All shared state sits behind `Arc` and short, non-async critical sections,
//! so every handle is `Send + Sync` and usable from any tokio task.

/// Shared types and data structures
pub mod shared;

/// REST/realtime client
pub mod client;
