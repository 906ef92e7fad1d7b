// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod icons;
pub mod legacy;
pub mod stats;

pub use icons::distinct_icon_urls;
pub use legacy::{user_to_legacy, video_to_legacy};
pub use stats::{collect_platform_stats, PlatformStats};
