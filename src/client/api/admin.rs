use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::shared::models::{
    AdminUser, BanChange, Page, Report, ReportDecision, ReportStatus, Role, RoleChange,
};

/// Back-office user and report management
#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Zero-based paged user listing, optionally filtered by keyword
    pub async fn users(&self, page: u32, keyword: Option<&str>) -> Result<Page<AdminUser>, ClientError> {
        let mut request = ApiRequest::get("/admin/users").query("page", page);
        if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
            request = request.query("keyword", keyword);
        }
        self.client.json(&request).await
    }

    pub async fn change_role(&self, user_id: i64, role: Role) -> Result<AdminUser, ClientError> {
        self.client
            .json(&ApiRequest::patch(format!("/admin/users/{}/role", user_id)).json(&RoleChange { role })?)
            .await
    }

    pub async fn set_banned(&self, user_id: i64, banned: bool) -> Result<AdminUser, ClientError> {
        self.client
            .json(&ApiRequest::patch(format!("/admin/users/{}/ban", user_id)).json(&BanChange { banned })?)
            .await
    }

    pub async fn reports(&self) -> Result<Vec<Report>, ClientError> {
        self.client.list(&ApiRequest::get("/admin/report/list")).await
    }

    pub async fn decide_report(&self, report_id: i64, status: ReportStatus) -> Result<Report, ClientError> {
        self.client
            .json(&ApiRequest::patch(format!("/admin/report/{}", report_id)).json(&ReportDecision { status })?)
            .await
    }
}
