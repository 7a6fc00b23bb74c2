//! QnA REST calls made by the asking user

use crate::common::{ticket_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::ClientError;
use routine_hub::shared::models::QnaStatus;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_posts_trimmed_question() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/qna"))
        .and(body_json(json!({ "title": "Sync issue", "content": "Plans vanish" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ticket_json(7, "Sync issue")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let ticket = backend.state.qna().create(" Sync issue ", "Plans vanish\n").await.unwrap();

    assert_eq!(ticket.qna_id, 7);
    assert_eq!(ticket.status, QnaStatus::Waiting);
}

#[tokio::test]
async fn test_empty_question_is_never_sent() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/qna"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;

    let qna = backend.state.qna();
    crate::assert_err!(qna.create("", "body").await, ClientError::Shared(_));
    crate::assert_err!(qna.create("title", "  ").await, ClientError::Shared(_));
}

#[tokio::test]
async fn test_my_tickets() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/qna/my"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "list": [ticket_json(1, "First"), ticket_json(2, "Second")] })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let tickets = backend.state.qna().my_tickets().await.unwrap();
    assert_eq!(tickets.iter().map(|t| t.qna_id).collect::<Vec<_>>(), vec![1, 2]);
}
