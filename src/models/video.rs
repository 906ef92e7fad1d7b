//! Video entry document as stored in Firestore.

use super::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a video entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    #[default]
    Draft,
    Pending,
    Published,
    #[serde(other)]
    Other,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Draft => "draft",
            VideoStatus::Pending => "pending",
            VideoStatus::Published => "published",
            VideoStatus::Other => "other",
        }
    }
}

/// Video entry stored in the `videos` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDocument {
    /// Firestore document ID
    #[serde(default, alias = "_firestore_id", skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_xid: Option<String>,
    /// Lower-cased author handle, used for lookups
    #[serde(default)]
    pub author_xid_lower: Option<String>,
    #[serde(default)]
    pub author_icon_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Entry type ("individual", "group", ...)
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: VideoStatus,
    /// Premiere slot
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
