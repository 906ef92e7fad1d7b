// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Author icon history.

use crate::models::VideoDocument;
use std::collections::HashSet;

/// Number of recent videos scanned for icons.
pub const RECENT_VIDEO_LIMIT: u32 = 50;

/// Distinct icon URLs in input order; the first occurrence wins.
///
/// Videos without an icon (or with an empty one) are skipped.
pub fn distinct_icon_urls<'a, I>(videos: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a VideoDocument>,
{
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter_map(|video| video.author_icon_url.as_deref())
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}
