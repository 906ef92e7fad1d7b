// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapping from stored documents to the legacy JSON shapes.

use crate::models::{LegacyUser, LegacyVideo, UserDocument, VideoDocument};
use crate::time_utils::format_optional_utc_rfc3339;

/// Entry type used when a video does not record one.
pub const DEFAULT_ENTRY_TYPE: &str = "individual";

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Map a user document to its legacy shape.
///
/// The linked X handle takes precedence over the handle typed at
/// registration, since it is the verified one.
pub fn user_to_legacy(doc: &UserDocument) -> LegacyUser {
    let linked_handle = doc
        .x_link
        .as_ref()
        .filter(|_| doc.is_x_linked())
        .and_then(|link| link.username.clone());

    LegacyUser {
        id: doc.id.clone(),
        username: text(&doc.display_name),
        xid: linked_handle.or_else(|| doc.xid.clone()).unwrap_or_default(),
        icon: text(&doc.icon_url),
        ylink: text(&doc.youtube_url),
        x_linked: doc.is_x_linked(),
        created_at: format_optional_utc_rfc3339(doc.created_at),
    }
}

/// Map a video document to its legacy shape.
pub fn video_to_legacy(doc: &VideoDocument) -> LegacyVideo {
    LegacyVideo {
        id: doc.id.clone(),
        title: text(&doc.title),
        description: text(&doc.description),
        author: text(&doc.author_name),
        author_xid: text(&doc.author_xid),
        icon: text(&doc.author_icon_url),
        ylink: text(&doc.video_url),
        thumbnail: text(&doc.thumbnail_url),
        music: text(&doc.music),
        credit: text(&doc.credit),
        entry_type: doc
            .entry_type
            .clone()
            .unwrap_or_else(|| DEFAULT_ENTRY_TYPE.to_string()),
        tags: doc.tags.clone().unwrap_or_default(),
        status: doc.status.as_str().to_string(),
        start_time: format_optional_utc_rfc3339(doc.scheduled_at),
        created_at: format_optional_utc_rfc3339(doc.created_at),
    }
}
