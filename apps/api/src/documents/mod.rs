//! Document persistence. The renderer only ever sees a `ResumeData`
//! snapshot; this module just keeps the latest one per document.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`: Postgres when a database is
//! configured, [`MemoryResumeStore`] otherwise and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{ResumeData, ResumeRow, StoredResume};

pub mod handlers;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// What a save writes.
#[derive(Debug, Clone)]
pub struct ResumeDraft {
    pub title: String,
    pub template_id: String,
    pub data: ResumeData,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts or replaces the document and returns the stored row.
    async fn upsert(&self, id: Uuid, draft: ResumeDraft) -> Result<StoredResume, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `resumes` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resumes (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                template_id TEXT NOT NULL,
                data JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!("resumes table ready");
        Ok(())
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn upsert(&self, id: Uuid, draft: ResumeDraft) -> Result<StoredResume, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, title, template_id, data, updated_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT (id) DO UPDATE
                SET title = EXCLUDED.title,
                    template_id = EXCLUDED.template_id,
                    data = EXCLUDED.data,
                    updated_at = EXCLUDED.updated_at
            RETURNING id, title, template_id, data, updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.template_id)
        .bind(sqlx::types::Json(&draft.data))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, title, template_id, data, updated_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Process-lifetime store used without `DATABASE_URL`.
#[derive(Default)]
pub struct MemoryResumeStore {
    documents: RwLock<HashMap<Uuid, StoredResume>>,
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn upsert(&self, id: Uuid, draft: ResumeDraft) -> Result<StoredResume, StoreError> {
        let stored = StoredResume {
            id,
            title: draft.title,
            template_id: draft.template_id,
            data: draft.data,
            updated_at: Utc::now(),
        };
        self.documents.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> ResumeDraft {
        ResumeDraft {
            title: title.to_string(),
            template_id: "harvard".to_string(),
            data: ResumeData::blank("ada@example.com"),
        }
    }

    #[tokio::test]
    async fn test_memory_store_upsert_replaces_snapshot() {
        let store = MemoryResumeStore::default();
        let id = Uuid::new_v4();

        let first = store.upsert(id, draft("First")).await.unwrap();
        let second = store.upsert(id, draft("Second")).await.unwrap();
        assert!(second.updated_at >= first.updated_at);

        let loaded = store.get(id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Second");
        assert_eq!(loaded.template_id, "harvard");
        assert_eq!(loaded.data.personal_info.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_memory_store_missing_document() {
        let store = MemoryResumeStore::default();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }
}
