//! QnA support tickets and replies

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QnaStatus {
    /// In the wait queue, no agent yet
    Waiting,
    /// Taken by an agent
    Matched,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QnaTicket {
    pub qna_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub title: String,
    pub content: String,
    pub status: QnaStatus,
    #[serde(default)]
    pub agent_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QnaReply {
    #[serde(default)]
    pub reply_id: Option<i64>,
    pub qna_id: i64,
    pub sender_id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQna {
    pub title: String,
    pub content: String,
}
