//! Category cache against the mock backend
//!
//! Cached lists are served first; a fetch only writes when the payload
//! actually changed.

use crate::common::{category_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::{CacheOutcome, KeyValueStore};
use routine_hub::shared::models::CategoryKind;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_revalidate_skips_identical_payload() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/target"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            category_json(1, "Health"),
            category_json(2, "Study"),
        ])))
        .expect(2)
        .mount(&backend.server)
        .await;

    let cache = backend.state.category_cache();
    let api = backend.state.categories();

    let (first, outcome) = cache.revalidate(CategoryKind::Target, &api).await.unwrap();
    assert_eq!(outcome, CacheOutcome::Updated);
    assert_eq!(first.len(), 2);

    let (_, outcome) = cache.revalidate(CategoryKind::Target, &api).await.unwrap();
    assert_eq!(outcome, CacheOutcome::Unchanged);
}

#[tokio::test]
async fn test_load_serves_cache_without_fetch() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/job"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [category_json(7, "Engineer")]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let cache = backend.state.category_cache();
    let api = backend.state.categories();

    let fetched = cache.load(CategoryKind::Job, &api).await.unwrap();
    let cached = cache.load(CategoryKind::Job, &api).await.unwrap();

    assert_eq!(fetched, cached);
    assert_eq!(cached[0].name, "Engineer");
    assert!(backend.store.get("categories:job").is_some());
}

#[tokio::test]
async fn test_kinds_are_cached_independently() {
    let backend = TestBackend::start().await;
    for (segment, name) in [("icon", "Run"), ("topMenu", "Home")] {
        Mock::given(method("GET"))
            .and(path(format!("/categories/{}", segment).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([category_json(1, name)])))
            .mount(&backend.server)
            .await;
    }

    let cache = backend.state.category_cache();
    let api = backend.state.categories();
    cache.revalidate(CategoryKind::Icon, &api).await.unwrap();
    cache.revalidate(CategoryKind::TopMenu, &api).await.unwrap();
    cache.invalidate(CategoryKind::Icon).unwrap();

    assert!(cache.cached(CategoryKind::Icon).is_none());
    assert_eq!(cache.cached(CategoryKind::TopMenu).unwrap()[0].name, "Home");
}
