//! User document as stored in Firestore.

use super::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Anything other than `admin` is a regular user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    /// Parse a role claim. Unknown values map to [`Role::User`].
    pub fn from_claim(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XLinkStatus {
    Linked,
    #[default]
    #[serde(other)]
    Unlinked,
}

impl XLinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            XLinkStatus::Linked => "linked",
            XLinkStatus::Unlinked => "unlinked",
        }
    }
}

/// Link between a PVSF account and an X (Twitter) account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: XLinkStatus,
    /// X handle without the leading `@`
    #[serde(default)]
    pub username: Option<String>,
    /// Numeric X user ID
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub linked_at: Option<DateTime<Utc>>,
}

/// User profile stored in the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Firestore document ID
    #[serde(default, alias = "_firestore_id", skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Handle entered at registration
    #[serde(default)]
    pub xid: Option<String>,
    #[serde(default)]
    pub x_link: Option<XLink>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserDocument {
    pub fn is_x_linked(&self) -> bool {
        self.x_link
            .as_ref()
            .is_some_and(|link| link.status == XLinkStatus::Linked)
    }
}
