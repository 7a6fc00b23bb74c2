//! My page: optimistic delete and like toggles

use crate::common::{plan_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::views::MyPage;
use routine_hub::client::ClientError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_lists(backend: &TestBackend) {
    Mock::given(method("GET"))
        .and(path("/myPage/auth/list/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            plan_json(1, "Morning run"),
            plan_json(2, "Reading"),
            plan_json(3, "Stretching"),
        ])))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/myPage/auth/list/likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/myPage/auth/list/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend.server)
        .await;
}

fn titles(page: &MyPage) -> Vec<&str> {
    page.plans.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_load_fills_all_lists() {
    let backend = TestBackend::signed_in("tok").await;
    mount_lists(&backend).await;

    let mut page = MyPage::new(&backend.state);
    page.load().await.unwrap();

    assert_eq!(titles(&page), vec!["Morning run", "Reading", "Stretching"]);
    assert!(page.liked.is_empty());
    assert!(page.reviews.is_empty());
}

#[tokio::test]
async fn test_failed_delete_restores_plan_in_place() {
    let backend = TestBackend::signed_in("tok").await;
    mount_lists(&backend).await;
    Mock::given(method("DELETE"))
        .and(path("/plan/2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&backend.server)
        .await;

    let mut page = MyPage::new(&backend.state);
    page.load().await.unwrap();

    crate::assert_err!(page.delete_plan(2).await, ClientError::Status { .. });
    assert_eq!(titles(&page), vec!["Morning run", "Reading", "Stretching"]);
    assert_eq!(backend.state.notices().current().unwrap().message, "boom");
}

#[tokio::test]
async fn test_successful_delete_removes_plan() {
    let backend = TestBackend::signed_in("tok").await;
    mount_lists(&backend).await;
    Mock::given(method("DELETE"))
        .and(path("/plan/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&backend.server)
        .await;

    let mut page = MyPage::new(&backend.state);
    page.load().await.unwrap();
    page.delete_plan(1).await.unwrap();

    assert_eq!(titles(&page), vec!["Reading", "Stretching"]);
}

#[tokio::test]
async fn test_failed_like_rolls_back() {
    let backend = TestBackend::signed_in("tok").await;
    mount_lists(&backend).await;
    Mock::given(method("POST"))
        .and(path("/plan/3/like"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let mut page = MyPage::new(&backend.state);
    page.load().await.unwrap();
    assert!(page.toggle_like(3).await.is_err());

    let plan = &page.plans[2];
    assert!(!plan.liked);
    assert_eq!(plan.like_count, 2);
    assert!(!page.is_like_pending(3));
}

#[tokio::test]
async fn test_like_takes_server_count() {
    let backend = TestBackend::signed_in("tok").await;
    mount_lists(&backend).await;
    Mock::given(method("POST"))
        .and(path("/plan/1/like"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "planId": 1, "liked": true, "likeCount": 10
        })))
        .mount(&backend.server)
        .await;

    let mut page = MyPage::new(&backend.state);
    page.load().await.unwrap();
    page.toggle_like(1).await.unwrap();

    assert!(page.plans[0].liked);
    assert_eq!(page.plans[0].like_count, 10);
}
