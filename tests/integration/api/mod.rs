//! API integration tests
//!
//! Endpoint families exercised through `AppState` against wiremock

mod auth_test;
mod category_test;
mod qna_test;
mod social_test;
