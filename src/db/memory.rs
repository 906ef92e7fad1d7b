//! In-process document store.
//!
//! Mirrors the Firestore queries used by the API, including Firestore's
//! behaviour of leaving out documents that lack the `orderBy` field. Ties on
//! the ordered field fall back to document ID in the same direction.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{UserDocument, VideoDocument, VideoStatus};
use async_trait::async_trait;
use dashmap::DashMap;

#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, UserDocument>,
    videos: DashMap<String, VideoDocument>,
    event_slots: DashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user, keyed by its `id`.
    pub fn insert_user(&self, user: UserDocument) {
        self.users.insert(user.id.clone(), user);
    }

    /// Insert or replace a video, keyed by its `id`.
    pub fn insert_video(&self, video: VideoDocument) {
        self.videos.insert(video.id.clone(), video);
    }

    pub fn insert_event_slot(&self, id: impl Into<String>, slot: serde_json::Value) {
        self.event_slots.insert(id.into(), slot);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        let count = match collection {
            collections::USERS => self.users.len(),
            collections::VIDEOS => self.videos.len(),
            collections::EVENT_SLOTS => self.event_slots.len(),
            _ => 0,
        };
        Ok(count as u64)
    }

    async fn list_linked_users(&self) -> Result<Vec<UserDocument>, AppError> {
        let mut users: Vec<UserDocument> = self
            .users
            .iter()
            .filter(|entry| entry.is_x_linked() && entry.created_at.is_some())
            .map(|entry| entry.value().clone())
            .collect();

        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(users)
    }

    async fn list_published_videos(&self) -> Result<Vec<VideoDocument>, AppError> {
        let mut videos: Vec<VideoDocument> = self
            .videos
            .iter()
            .filter(|entry| entry.status == VideoStatus::Published && entry.scheduled_at.is_some())
            .map(|entry| entry.value().clone())
            .collect();

        videos.sort_by(|a, b| {
            b.scheduled_at
                .cmp(&a.scheduled_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(videos)
    }

    async fn recent_videos_by_author(
        &self,
        xid_lower: &str,
        limit: u32,
    ) -> Result<Vec<VideoDocument>, AppError> {
        let mut videos: Vec<VideoDocument> = self
            .videos
            .iter()
            .filter(|entry| {
                entry.author_xid_lower.as_deref() == Some(xid_lower) && entry.created_at.is_some()
            })
            .map(|entry| entry.value().clone())
            .collect();

        videos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        videos.truncate(limit as usize);
        Ok(videos)
    }
}
