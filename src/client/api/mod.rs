//! REST endpoint families
//!
//! Thin typed wrappers over [`ApiClient`](crate::client::http::ApiClient).
//! Each one validates its input where a form is involved, sends one request
//! and decodes the typed response.

pub mod admin;
pub mod auth;
pub mod categories;
pub mod mypage;
pub mod plans;
pub mod qna;
pub mod social;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use categories::CategoryApi;
pub use mypage::MyPageApi;
pub use plans::PlanApi;
pub use qna::QnaApi;
pub use social::SocialApi;
