//! Admin dashboard: user search history and category edits

use crate::common::{category_json, user_json, TestBackend};
use pretty_assertions::assert_eq;
use routine_hub::client::views::AdminDashboard;
use routine_hub::client::SearchScope;
use routine_hub::shared::models::{Category, CategoryKind, NewIcon, Role};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_user_search_uses_its_own_history_scope() {
    let backend = TestBackend::signed_in_admin("tok").await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .and(query_param("keyword", "kim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [user_json(5, &["ROLE_USER"])],
            "totalPages": 1,
            "totalElements": 1,
            "number": 0,
        })))
        .mount(&backend.server)
        .await;

    let mut dashboard = AdminDashboard::new(&backend.state);
    dashboard.search_users(0, Some(" kim ")).await.unwrap();

    assert_eq!(dashboard.users.as_ref().unwrap().content[0].user_id, 5);
    assert_eq!(dashboard.recent_searches(), vec!["kim"]);
    assert!(backend.state.search_history(SearchScope::Plans).terms().is_empty());
}

#[tokio::test]
async fn test_role_change_updates_listed_user() {
    let backend = TestBackend::signed_in_admin("tok").await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [user_json(5, &["ROLE_USER"])],
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/admin/users/5/role"))
        .and(body_json(json!({ "role": "ROLE_MANAGER" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, &["ROLE_MANAGER"])))
        .mount(&backend.server)
        .await;

    let mut dashboard = AdminDashboard::new(&backend.state);
    dashboard.search_users(0, None).await.unwrap();
    dashboard.change_role(5, Role::Manager).await.unwrap();

    assert_eq!(dashboard.users.unwrap().content[0].roles, vec![Role::Manager]);
}

#[tokio::test]
async fn test_top_menu_save_refetches_list() {
    let backend = TestBackend::signed_in_admin("tok").await;
    Mock::given(method("PUT"))
        .and(path("/categories/admin/topMenu"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories/topMenu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            category_json(2, "Explore"),
            category_json(1, "Home"),
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut dashboard = AdminDashboard::new(&backend.state);
    let entries = vec![
        Category { id: 2, name: "Explore".to_string(), image_url: None, sort_order: Some(0) },
        Category { id: 1, name: "Home".to_string(), image_url: None, sort_order: Some(1) },
    ];
    dashboard.save_top_menu(&entries).await.unwrap();

    let names: Vec<_> = dashboard.top_menu.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Explore", "Home"]);
    let cached = backend.state.category_cache().cached(CategoryKind::TopMenu).unwrap();
    assert_eq!(cached, dashboard.top_menu);
}

#[tokio::test]
async fn test_adding_icon_replaces_cached_icons() {
    let backend = TestBackend::signed_in_admin("tok").await;
    backend
        .state
        .category_cache()
        .commit(CategoryKind::Icon, &[])
        .unwrap();
    Mock::given(method("POST"))
        .and(path("/categories/admin/icon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_json(9, "Swim")))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories/icon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([category_json(9, "Swim")])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut dashboard = AdminDashboard::new(&backend.state);
    let icon = NewIcon {
        name: "Swim".to_string(),
        image_url: "https://cdn.example.com/swim.png".to_string(),
    };
    dashboard.add_icon(&icon).await.unwrap();

    assert_eq!(dashboard.icons.len(), 1);
    assert_eq!(
        backend.state.category_cache().cached(CategoryKind::Icon).unwrap()[0].id,
        9
    );
}
