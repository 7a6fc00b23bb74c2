//! Realtime QnA Events
//!
//! Payloads carried over the message broker for the QnA support feature.
//! Wait-queue updates arrive as tagged deltas; the set of tags is closed so a
//! consumer's `match` is checked for exhaustiveness at compile time.
//!
//! # Wire format
//!
//! ```json
//! {"type": "ADD", "data": {"qnaId": 4, "...": "..."}}
//! {"type": "REMOVE", "data": 4}
//! {"type": "RELOAD", "data": [{"qnaId": 4, "...": "..."}]}
//! ```

use crate::shared::error::SharedError;
use crate::shared::models::{QnaReply, QnaTicket};
use serde::{Deserialize, Serialize};

/// Delta applied to the wait-queue list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "UPPERCASE")]
pub enum QnaDelta {
    /// Replace the whole list
    Reload(Vec<QnaTicket>),
    /// A new ticket entered the queue
    Add(QnaTicket),
    /// A ticket left the queue (taken or withdrawn)
    Remove(i64),
    /// A ticket changed in place
    Update(QnaTicket),
}

impl QnaDelta {
    /// Decode a broker frame body
    pub fn decode(body: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Tag name as it appears on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            QnaDelta::Reload(_) => "RELOAD",
            QnaDelta::Add(_) => "ADD",
            QnaDelta::Remove(_) => "REMOVE",
            QnaDelta::Update(_) => "UPDATE",
        }
    }
}

/// Chat message published on a ticket thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReplyFrame {
    pub content: String,
}

/// Decode a reply pushed on `/sub/qna/{id}`
pub fn decode_reply(body: &str) -> Result<QnaReply, SharedError> {
    Ok(serde_json::from_str(body)?)
}
