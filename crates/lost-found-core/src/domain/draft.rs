//! Report payloads
//!
//! What the client sends on create: the form fields plus the creation stamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Status every new report starts in
pub const STATUS_ACTIVE: &str = "active";

/// Report fields before the client stamps them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub description: String,
    pub user_name: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turned_in: Option<bool>,
}

impl ItemDraft {
    /// Attach `createdAt` and the initial status
    pub fn stamp(self, now: DateTime<Utc>) -> NewItemRecord {
        NewItemRecord {
            draft: self,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

/// Body of `POST /{collection}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRecord {
    #[serde(flatten)]
    pub draft: ItemDraft,
    pub created_at: String,
    pub status: String,
}
