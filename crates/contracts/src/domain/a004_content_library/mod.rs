pub mod schema;

use serde::{Deserialize, Serialize};

use crate::shared::list::{Pagination, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::shared::sentinel::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Pending,
        ContentStatus::Approved,
        ContentStatus::Rejected,
        ContentStatus::Flagged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Rejected => "rejected",
            ContentStatus::Flagged => "flagged",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Pending => "Pending",
            ContentStatus::Approved => "Approved",
            ContentStatus::Rejected => "Rejected",
            ContentStatus::Flagged => "Flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    pub id: String,
    pub title: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub subcategory_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub age_rating: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Arguments of the content library listing.
///
/// `status = "all"`, empty `search`, empty `confidence_score_sort` and empty
/// `category_id` are unset and omitted from the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentListArgs {
    pub sort_order: SortOrder,
    pub page: i64,
    pub limit: i64,
    pub status: String,
    pub search: String,
    pub confidence_score_sort: String,
    pub category_id: String,
}

impl Default for ContentListArgs {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Desc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            status: ALL.to_string(),
            search: String::new(),
            confidence_score_sort: String::new(),
            category_id: String::new(),
        }
    }
}

/// Tag metadata editable from the content drawer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentMetadata {
    pub category_id: String,
    pub subcategory_ids: Vec<String>,
    pub tags: Vec<String>,
    pub age_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateContentArgs {
    pub id: String,
    pub body: UpdateContentMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
    Flag,
}

impl ModerationAction {
    pub fn label(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "Approve",
            ModerationAction::Reject => "Reject",
            ModerationAction::Flag => "Flag",
        }
    }

    /// Reject and flag must carry a reason
    pub fn needs_reason(&self) -> bool {
        !matches!(self, ModerationAction::Approve)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentActionRequest {
    pub content_ids: Vec<String>,
    pub action: ModerationAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Audit record written by every moderation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VettingLog {
    pub id: String,
    pub content_id: String,
    pub action: ModerationAction,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub performed_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VettingLogArgs {
    pub pagination: Pagination,
    pub content_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_omits_reason() {
        let req = ContentActionRequest {
            content_ids: vec!["c1".into()],
            action: ModerationAction::Approve,
            reason: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "contentIds": ["c1"], "action": "approve" }));
        assert!(!ModerationAction::Approve.needs_reason());
        assert!(ModerationAction::Reject.needs_reason());
    }

    #[test]
    fn test_detail_tolerates_missing_optional_fields() {
        let detail: ContentDetail =
            serde_json::from_str(r#"{"id":"c1","title":"Clip","status":"flagged"}"#).unwrap();
        assert_eq!(detail.status, ContentStatus::Flagged);
        assert!(detail.tags.is_empty());
        assert_eq!(detail.category_id, None);
    }
}
