//! View-model tests

mod admin_test;
mod mypage_test;
mod search_test;
