//! Routine Hub client
//!
//! Everything with I/O: the REST wrapper, session storage, token refresh,
//! client-local caches, feature view-models and the realtime QnA channel.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs             - Module exports
//! ├── main.rs            - Command-line entry point (binary)
//! ├── config.rs          - Server/broker URLs and limits
//! ├── error.rs           - ClientError, RefreshError, StorageError
//! ├── http.rs            - ApiClient (401 -> refresh -> resend once)
//! ├── refresh.rs         - Single-flight TokenRefresher
//! ├── session.rs         - Access token and cached user
//! ├── storage.rs         - KeyValueStore, MemoryStore, FileStore
//! ├── category_cache.rs  - Stale-while-revalidate category lists
//! ├── search_history.rs  - Recent search terms per scope
//! ├── optimistic.rs      - Like toggles with rollback
//! ├── latest.rs          - Out-of-order response guard
//! ├── notice.rs          - Auto-dismissing status notices
//! ├── validation.rs      - Form checks before submission
//! ├── routes.rs          - Route table and Navigator
//! ├── state.rs           - AppState wiring
//! ├── api/               - Endpoint families
//! ├── views/             - MyPage, PlanSearch, AdminDashboard
//! └── realtime/          - Broker port and QnA channel
//! ```

pub mod api;
pub mod category_cache;
pub mod config;
pub mod error;
pub mod http;
pub mod latest;
pub mod notice;
pub mod optimistic;
pub mod realtime;
pub mod refresh;
pub mod routes;
pub mod search_history;
pub mod session;
pub mod state;
pub mod storage;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use category_cache::{CacheOutcome, CategoryCache};
pub use config::Config;
pub use error::{ClientError, RefreshError, StorageError};
pub use http::{ApiClient, ApiRequest, HttpReissuer};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use refresh::{Reissuer, TokenRefresher};
pub use routes::{AdminSection, Navigator, Route, WatchNavigator};
pub use search_history::{SearchHistory, SearchScope};
pub use session::Session;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
