//! Plan search: history recording and stale-response handling

use crate::common::{plan_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::views::PlanSearch;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_search_records_history_most_recent_first() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/search/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([plan_json(1, "Run")])))
        .mount(&backend.server)
        .await;

    let search = PlanSearch::new(&backend.state);
    for term in ["run", "read", " run "] {
        search.search(term).await.unwrap();
    }

    assert_eq!(search.recent(), vec!["run", "read"]);
    assert_eq!(search.results().len(), 1);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/search/plan"))
        .and(query_param("keyword", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([plan_json(1, "Slow")]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/plan"))
        .and(query_param("keyword", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([plan_json(2, "Fast")])))
        .mount(&backend.server)
        .await;

    let search = PlanSearch::new(&backend.state);
    let slow = search.search("slow");
    let fast = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        search.search("fast").await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow.unwrap(), None);
    assert_eq!(fast.unwrap().unwrap()[0].title, "Fast");
    assert_eq!(search.results()[0].title, "Fast");
}

#[tokio::test]
async fn test_signed_in_search_is_logged_on_server() {
    let backend = TestBackend::signed_in("tok").await;
    Mock::given(method("GET"))
        .and(path("/search/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/search/log"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;

    let results = PlanSearch::new(&backend.state).search("yoga").await.unwrap();
    assert_eq!(results, Some(vec![]));
}

#[tokio::test]
async fn test_clearing_the_box_discards_in_flight_search() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/search/plan"))
        .and(query_param("keyword", "yoga"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([plan_json(1, "Yoga")]))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&backend.server)
        .await;

    let search = PlanSearch::new(&backend.state);
    let slow = search.search("yoga");
    let cleared = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        search.search("   ").await
    };
    let (slow, cleared) = tokio::join!(slow, cleared);

    assert_eq!(slow.unwrap(), None);
    assert_eq!(cleared.unwrap(), Some(vec![]));
    assert!(search.results().is_empty());
}
