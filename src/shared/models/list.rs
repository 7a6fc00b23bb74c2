//! List response schemas
//!
//! The backend is not consistent about where list endpoints put their array:
//! some return it bare, others wrap it under `data`, `content` or `list`.
//! Every list call decodes through [`ListEnvelope`] so call sites only ever
//! see a `Vec<T>`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Content { content: Vec<T> },
    List { list: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items)
            | ListEnvelope::Data { data: items }
            | ListEnvelope::Content { content: items }
            | ListEnvelope::List { list: items } => items,
        }
    }
}

impl<T> From<ListEnvelope<T>> for Vec<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        envelope.into_vec()
    }
}

/// Paged listing (admin tables)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number.saturating_add(1) >= self.total_pages
    }
}
