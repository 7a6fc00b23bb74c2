//! Category payloads (target, job, icon, top-menu)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag dimension a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Target,
    Job,
    Icon,
    TopMenu,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Target,
        CategoryKind::Job,
        CategoryKind::Icon,
        CategoryKind::TopMenu,
    ];

    /// Path segment under `/categories/`
    pub fn path_segment(self) -> &'static str {
        match self {
            CategoryKind::Target => "target",
            CategoryKind::Job => "job",
            CategoryKind::Icon => "icon",
            CategoryKind::TopMenu => "topMenu",
        }
    }

    /// Persistent cache key
    pub fn storage_key(self) -> String {
        format!("categories:{}", self.path_segment())
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "categoryId", alias = "targetId", alias = "jobId", alias = "iconId")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Body of `POST /categories/admin/icon`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIcon {
    pub name: String,
    pub image_url: String,
}
