use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::shared::models::{Category, CategoryKind, NewIcon};

/// Category lookups plus the admin icon/top-menu edits
#[derive(Clone)]
pub struct CategoryApi {
    client: ApiClient,
}

impl CategoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Category lists are public
    pub async fn list(&self, kind: CategoryKind) -> Result<Vec<Category>, ClientError> {
        let request = ApiRequest::get(format!("/categories/{}", kind.path_segment())).public();
        self.client.list(&request).await
    }

    pub async fn add_icon(&self, icon: &NewIcon) -> Result<Category, ClientError> {
        self.client
            .json(&ApiRequest::post("/categories/admin/icon").json(icon)?)
            .await
    }

    pub async fn delete_icon(&self, icon_id: i64) -> Result<(), ClientError> {
        self.client
            .execute(&ApiRequest::delete(format!("/categories/admin/icon/{}", icon_id)))
            .await
    }

    /// Replace the top-menu entries (order is significant)
    pub async fn replace_top_menu(&self, entries: &[Category]) -> Result<(), ClientError> {
        self.client
            .execute(&ApiRequest::put("/categories/admin/topMenu").json(entries)?)
            .await
    }
}
