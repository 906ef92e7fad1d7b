//! Database layer (Firestore).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{UserDocument, VideoDocument};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const VIDEOS: &str = "videos";
    pub const EVENT_SLOTS: &str = "eventSlots";
}

/// Read-only queries the API issues against the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Number of documents in a collection (server-side aggregation).
    async fn count(&self, collection: &str) -> Result<u64, AppError>;

    /// Users with a linked X account, newest registration first.
    async fn list_linked_users(&self) -> Result<Vec<UserDocument>, AppError>;

    /// Published videos, latest premiere first.
    async fn list_published_videos(&self) -> Result<Vec<VideoDocument>, AppError>;

    /// Most recently created videos by an author, newest first.
    async fn recent_videos_by_author(
        &self,
        xid_lower: &str,
        limit: u32,
    ) -> Result<Vec<VideoDocument>, AppError>;
}
