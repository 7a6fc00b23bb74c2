//! Back-office payloads: managed users and reports

use super::user::Role;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub user_id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub report_count: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportTarget {
    Plan,
    Review,
    User,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_id: i64,
    pub reporter_id: i64,
    pub target_type: ReportTarget,
    pub target_id: i64,
    pub reason: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChange {
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanChange {
    pub banned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDecision {
    pub status: ReportStatus,
}
