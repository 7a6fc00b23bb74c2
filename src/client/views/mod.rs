//! Feature view-models
//!
//! Screen-level state driven by the endpoint families: each view owns the
//! lists it shows and applies optimistic edits, history and notices around
//! the network calls.

pub mod admin;
pub mod mypage;
pub mod search;

pub use admin::AdminDashboard;
pub use mypage::MyPage;
pub use search::PlanSearch;
