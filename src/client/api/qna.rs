use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::shared::models::{NewQna, QnaReply, QnaTicket};
use crate::shared::SharedError;

/// REST half of the QnA feature; live updates come through `realtime::qna`
#[derive(Clone)]
pub struct QnaApi {
    client: ApiClient,
}

impl QnaApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, title: &str, content: &str) -> Result<QnaTicket, ClientError> {
        if title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title is required").into());
        }
        if content.trim().is_empty() {
            return Err(SharedError::validation("content", "Please describe your question").into());
        }
        let body = NewQna {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        };
        self.client.json(&ApiRequest::post("/qna").json(&body)?).await
    }

    pub async fn my_tickets(&self) -> Result<Vec<QnaTicket>, ClientError> {
        self.client.list(&ApiRequest::get("/qna/my")).await
    }

    /// Initial snapshot of the wait queue (agents only)
    pub async fn wait_list(&self) -> Result<Vec<QnaTicket>, ClientError> {
        self.client.list(&ApiRequest::get("/admin/qna/wait")).await
    }

    pub async fn replies(&self, qna_id: i64) -> Result<Vec<QnaReply>, ClientError> {
        self.client
            .list(&ApiRequest::get(format!("/qna/{}/reply", qna_id)))
            .await
    }

    pub async fn close(&self, qna_id: i64) -> Result<QnaTicket, ClientError> {
        self.client
            .json(&ApiRequest::patch(format!("/qna/{}/close", qna_id)))
            .await
    }
}
