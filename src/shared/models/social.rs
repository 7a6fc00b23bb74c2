//! Likes, reviews and search-log payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i64,
    pub plan_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub content: String,
}

/// Like state of a plan after a like/unlike call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub plan_id: i64,
    pub liked: bool,
    pub like_count: u32,
}

impl LikeStatus {
    /// The state after the user flips the like button
    pub fn toggled(self) -> Self {
        let like_count = if self.liked {
            self.like_count.saturating_sub(1)
        } else {
            self.like_count.saturating_add(1)
        };
        Self {
            liked: !self.liked,
            like_count,
            ..self
        }
    }
}

/// Server-side search log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchLog {
    pub search_log_id: i64,
    pub keyword: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
