//! Reviews and the server-side search log

use crate::common::TestBackend;
use pretty_assertions::assert_eq;
use routine_hub::client::ClientError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn review_json(review_id: i64, content: &str) -> serde_json::Value {
    json!({
        "reviewId": review_id,
        "planId": 3,
        "userId": 1,
        "nickname": "user1",
        "content": content,
    })
}

#[tokio::test]
async fn test_reviews_are_public_and_unwrapped() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/3/review"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [review_json(1, "Nice"), review_json(2, "Hard")] })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let reviews = backend.state.social().reviews(3).await.unwrap();

    let contents: Vec<_> = reviews.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, vec!["Nice", "Hard"]);
}

#[tokio::test]
async fn test_add_review_posts_trimmed_content() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/plan/3/review"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({ "content": "Great routine" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(review_json(9, "Great routine")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let review = backend.state.social().add_review(3, "  Great routine \n").await.unwrap();
    assert_eq!(review.review_id, 9);
}

#[tokio::test]
async fn test_blank_review_is_never_sent() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/plan/3/review"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;

    crate::assert_err!(backend.state.social().add_review(3, "   ").await, ClientError::Shared(_));
}

#[tokio::test]
async fn test_delete_review() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("DELETE"))
        .and(path("/review/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    crate::assert_ok!(backend.state.social().delete_review(9).await);
}

#[tokio::test]
async fn test_search_log_listing_and_deletion() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/search/log"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "searchLogId": 4, "keyword": "yoga" },
            { "searchLogId": 5, "keyword": "run" },
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/search/log/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/search/log"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let social = backend.state.social();
    let logs = social.search_logs().await.unwrap();
    assert_eq!(logs.iter().map(|l| l.search_log_id).collect::<Vec<_>>(), vec![4, 5]);

    crate::assert_ok!(social.delete_search_log(Some(4)).await);
    crate::assert_ok!(social.delete_search_log(None).await);
}
