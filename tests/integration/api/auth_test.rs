//! Authentication API integration tests
//!
//! Login, logout, signup and profile calls against the mock backend.

use crate::common::{user_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::storage::keys;
use routine_hub::client::{ClientError, KeyValueStore};
use routine_hub::shared::models::{ProfileUpdate, SignupRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_persists_token_from_body() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .and(body_json(json!({ "email": "user1@example.com", "password": "hunter22" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(1, &["ROLE_USER"]),
            "accessToken": "body-token",
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let user = crate::assert_ok!(backend.state.auth().login("user1@example.com", "hunter22").await);

    assert_eq!(user.user_id, 1);
    assert_eq!(backend.store.get(keys::ACCESS_TOKEN).as_deref(), Some("body-token"));
    assert!(backend.state.session().is_authenticated());
}

#[tokio::test]
async fn test_login_prefers_authorization_header() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Authorization", "Bearer header-token")
                .set_body_json(json!({ "user": user_json(2, &["ROLE_ADMIN"]) })),
        )
        .mount(&backend.server)
        .await;

    backend.state.auth().login("user2@example.com", "hunter22").await.unwrap();

    assert_eq!(backend.state.session().access_token().as_deref(), Some("header-token"));
    assert!(backend.state.session().is_admin());
}

#[tokio::test]
async fn test_failed_login_surfaces_server_message() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Wrong password" })),
        )
        .mount(&backend.server)
        .await;

    let err = backend.state.auth().login("a@b.co", "nope").await.unwrap_err();

    crate::assert_contains!(err.user_message(), "Wrong password");
    assert!(!backend.state.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/user/logout"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend.server)
        .await;

    let result = backend.state.auth().logout().await;

    crate::assert_err!(result, ClientError::Status { .. });
    assert!(!backend.state.session().is_authenticated());
    assert!(backend.store.get(keys::USER_INFO).is_none());
}

#[tokio::test]
async fn test_invalid_signup_never_reaches_server() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/user/join"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let form = SignupRequest {
        email: "not-an-email".to_string(),
        password: "hunter22".to_string(),
        nickname: "ann".to_string(),
        job_id: None,
        target_ids: vec![],
    };

    crate::assert_err!(backend.state.auth().signup(&form).await, ClientError::Shared(_));
}

#[tokio::test]
async fn test_me_refreshes_stored_user() {
    let backend = TestBackend::signed_in("tok").await;
    let mut updated = user_json(1, &["ROLE_USER"]);
    updated["nickname"] = json!("renamed");
    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&backend.server)
        .await;

    backend.state.auth().me().await.unwrap();

    assert_eq!(backend.state.session().user().unwrap().nickname, "renamed");
}

#[tokio::test]
async fn test_authenticated_call_without_session_fails_fast() {
    let backend = TestBackend::start().await;

    crate::assert_err!(backend.state.auth().me().await, ClientError::NotAuthenticated);
    assert!(backend.server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_update_profile_patches_only_set_fields() {
    let backend = TestBackend::signed_in("tok").await;
    let mut updated = user_json(1, &["ROLE_USER"]);
    updated["nickname"] = json!("sprinter");
    updated["introduce"] = json!("early riser");
    Mock::given(method("PATCH"))
        .and(path("/user/me"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({ "nickname": "sprinter", "introduce": "early riser" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&backend.server)
        .await;

    let update = ProfileUpdate {
        nickname: Some("sprinter".to_string()),
        introduce: Some("early riser".to_string()),
        ..Default::default()
    };
    let user = backend.state.auth().update_profile(&update).await.unwrap();

    assert_eq!(user.nickname, "sprinter");
    assert_eq!(backend.state.session().user().unwrap().nickname, "sprinter");
}
