//! Plan (routine) and Activity payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single timed, rated sub-task within a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub activity_id: Option<i64>,
    pub name: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub icon_id: Option<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// A user-created routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub plan_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub user_id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub duration_days: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default, rename = "isPublic")]
    pub shared: bool,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub target_ids: Vec<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /plan` and `PATCH /plan/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration_days: u32,
    pub activities: Vec<Activity>,
    #[serde(rename = "isPublic")]
    pub shared: bool,
    #[serde(default)]
    pub target_ids: Vec<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
}

impl From<&Plan> for PlanForm {
    fn from(plan: &Plan) -> Self {
        Self {
            title: plan.title.clone(),
            description: plan.description.clone(),
            duration_days: plan.duration_days,
            activities: plan.activities.clone(),
            shared: plan.shared,
            target_ids: plan.target_ids.clone(),
            job_id: plan.job_id,
        }
    }
}

/// Body of `PATCH /plan/{id}/activity/{aid}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProgress {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
