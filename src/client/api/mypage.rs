use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::shared::models::{Plan, Review};

/// Lists behind `/myPage/auth/list/*`
#[derive(Clone)]
pub struct MyPageApi {
    client: ApiClient,
}

impl MyPageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn my_plans(&self) -> Result<Vec<Plan>, ClientError> {
        self.client
            .list(&ApiRequest::get("/myPage/auth/list/plans"))
            .await
    }

    pub async fn liked_plans(&self) -> Result<Vec<Plan>, ClientError> {
        self.client
            .list(&ApiRequest::get("/myPage/auth/list/likes"))
            .await
    }

    pub async fn my_reviews(&self) -> Result<Vec<Review>, ClientError> {
        self.client
            .list(&ApiRequest::get("/myPage/auth/list/reviews"))
            .await
    }
}
