use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::client::validation;
use crate::shared::models::{LikeStatus, NewReview, Plan, Review, SearchLog};

/// Likes, reviews, plan search and the server-side search log
#[derive(Clone)]
pub struct SocialApi {
    client: ApiClient,
}

impl SocialApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn like(&self, plan_id: i64) -> Result<LikeStatus, ClientError> {
        self.client
            .json(&ApiRequest::post(format!("/plan/{}/like", plan_id)))
            .await
    }

    pub async fn unlike(&self, plan_id: i64) -> Result<LikeStatus, ClientError> {
        self.client
            .json(&ApiRequest::delete(format!("/plan/{}/like", plan_id)))
            .await
    }

    /// Like when `like` is true, unlike otherwise
    pub async fn set_like(&self, plan_id: i64, like: bool) -> Result<LikeStatus, ClientError> {
        if like {
            self.like(plan_id).await
        } else {
            self.unlike(plan_id).await
        }
    }

    pub async fn reviews(&self, plan_id: i64) -> Result<Vec<Review>, ClientError> {
        self.client
            .list(&ApiRequest::get(format!("/plan/{}/review", plan_id)).public())
            .await
    }

    pub async fn add_review(&self, plan_id: i64, content: &str) -> Result<Review, ClientError> {
        validation::validate_review(content)?;
        let body = NewReview {
            content: content.trim().to_string(),
        };
        self.client
            .json(&ApiRequest::post(format!("/plan/{}/review", plan_id)).json(&body)?)
            .await
    }

    pub async fn delete_review(&self, review_id: i64) -> Result<(), ClientError> {
        self.client
            .execute(&ApiRequest::delete(format!("/review/{}", review_id)))
            .await
    }

    pub async fn search_plans(&self, keyword: &str) -> Result<Vec<Plan>, ClientError> {
        self.client
            .list(&ApiRequest::get("/search/plan").query("keyword", keyword).public())
            .await
    }

    pub async fn search_logs(&self) -> Result<Vec<SearchLog>, ClientError> {
        self.client.list(&ApiRequest::get("/search/log")).await
    }

    pub async fn add_search_log(&self, keyword: &str) -> Result<(), ClientError> {
        self.client
            .execute(&ApiRequest::post("/search/log").json(&serde_json::json!({ "keyword": keyword }))?)
            .await
    }

    /// Delete one entry, or the whole log when `search_log_id` is `None`
    pub async fn delete_search_log(&self, search_log_id: Option<i64>) -> Result<(), ClientError> {
        let path = match search_log_id {
            Some(id) => format!("/search/log/{}", id),
            None => "/search/log".to_string(),
        };
        self.client.execute(&ApiRequest::delete(path)).await
    }
}
