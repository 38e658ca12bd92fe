//! Local file system form store
//!
//! This module implements a store provider that keeps one JSON file per
//! form under a base directory. Suitable for single-process deployments
//! and durable test fixtures.

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs as tokio_fs;
use tokio::sync::Mutex;

use super::{FormRecord, FormStore, StoreConfig, StoreError};
use crate::form::FormId;

/// A store provider that uses the local file system
pub struct LocalStore {
    /// Base directory for storage
    base_dir: PathBuf,

    /// Serializes id allocation across concurrent creates
    create_lock: Mutex<()>,
}

impl LocalStore {
    /// Create a new local store provider
    pub async fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let base_dir = config.base_dir.clone();

        // Create base directory if it doesn't exist
        if !base_dir.exists() {
            tokio_fs::create_dir_all(&base_dir).await?;
        }

        Ok(Self {
            base_dir,
            create_lock: Mutex::new(()),
        })
    }

    /// Get the path for a specific form id
    fn record_path(&self, id: FormId) -> PathBuf {
        self.base_dir.join(format!("{}.json", id))
    }

    async fn read_record(&self, id: FormId) -> Result<FormRecord, StoreError> {
        let path = self.record_path(id);

        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }

        let data = tokio_fs::read(&path).await?;
        serde_json::from_slice(&data).map_err(|e| StoreError::SerializationError(e.to_string()))
    }

    async fn write_record(&self, record: &FormRecord) -> Result<(), StoreError> {
        let data = serde_json::to_vec(record)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        tokio_fs::write(self.record_path(record.id), data).await?;
        Ok(())
    }

    /// Scan the base directory for the highest allocated id
    async fn max_id(&self) -> Result<FormId, StoreError> {
        let mut max = 0;
        let mut entries = tokio_fs::read_dir(&self.base_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(id) = stem.parse::<FormId>() {
                    max = max.max(id);
                }
            }
        }
        Ok(max)
    }
}

#[async_trait::async_trait]
impl FormStore for LocalStore {
    async fn create(&self, owner_id: &str, content: String) -> Result<FormRecord, StoreError> {
        let _guard = self.create_lock.lock().await;
        let id = self.max_id().await? + 1;

        let now = Utc::now();
        let record = FormRecord {
            id,
            owner_id: owner_id.to_string(),
            content,
            published: false,
            created_at: now,
            updated_at: now,
        };
        self.write_record(&record).await?;
        Ok(record)
    }

    async fn find(&self, id: FormId) -> Result<FormRecord, StoreError> {
        self.read_record(id).await
    }

    async fn update_content(&self, id: FormId, content: String) -> Result<FormRecord, StoreError> {
        let mut record = self.read_record(id).await?;
        record.content = content;
        record.updated_at = Utc::now();
        self.write_record(&record).await?;
        Ok(record)
    }

    async fn set_published(&self, id: FormId, published: bool) -> Result<FormRecord, StoreError> {
        let mut record = self.read_record(id).await?;
        record.published = published;
        record.updated_at = Utc::now();
        self.write_record(&record).await?;
        Ok(record)
    }

    async fn remove(&self, id: FormId) -> Result<(), StoreError> {
        let path = self.record_path(id);

        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }

        tokio_fs::remove_file(&path).await?;
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FormRecord>, StoreError> {
        let mut records = Vec::new();

        let mut entries = tokio_fs::read_dir(&self.base_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let data = tokio_fs::read(&path).await?;
            let record: FormRecord = serde_json::from_slice(&data)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            if record.owner_id == owner_id {
                records.push(record);
            }
        }

        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
