// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod legacy;
pub mod user;
pub mod video;

pub use legacy::{LegacyUser, LegacyVideo};
pub use user::{Role, UserDocument, XLink, XLinkStatus};
pub use video::{VideoDocument, VideoStatus};

use serde::{Deserialize, Deserializer};

/// Deserialize a field whose stored value may be `null`, mapping null to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
