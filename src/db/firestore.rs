// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed, read-only queries.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{UserDocument, VideoDocument, VideoStatus, XLinkStatus};
use async_trait::async_trait;
use firestore::FirestoreQueryDirection;
use serde::Deserialize;

/// Result row of a `count()` aggregation query.
#[derive(Debug, Deserialize)]
struct CountAggregate {
    count: u64,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }
}

#[async_trait]
impl DocumentStore for FirestoreDb {
    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        let rows: Vec<CountAggregate> = self
            .get_client()?
            .fluent()
            .select()
            .from(collection)
            .aggregate(|a| a.fields([a.field("count").count()]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(format!("Count of {} failed: {}", collection, e)))?;

        Ok(rows.first().map(|row| row.count).unwrap_or(0))
    }

    async fn list_linked_users(&self) -> Result<Vec<UserDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(|q| q.for_all([q.field("xLink.status").eq(XLinkStatus::Linked.as_str())]))
            .order_by([("createdAt", FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn list_published_videos(&self) -> Result<Vec<VideoDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::VIDEOS)
            .filter(|q| q.for_all([q.field("status").eq(VideoStatus::Published.as_str())]))
            .order_by([("scheduledAt", FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn recent_videos_by_author(
        &self,
        xid_lower: &str,
        limit: u32,
    ) -> Result<Vec<VideoDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::VIDEOS)
            .filter(|q| q.for_all([q.field("authorXidLower").eq(xid_lower)]))
            .order_by([("createdAt", FirestoreQueryDirection::Descending)])
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
