//! In-memory form store
//!
//! The default provider for tests and single-process embedding. Ids are
//! assigned from a monotonically increasing counter.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::{FormRecord, FormStore, StoreError};
use crate::form::FormId;

pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    records: HashMap<FormId, FormRecord>,
    next_id: FormId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FormStore for MemoryStore {
    async fn create(&self, owner_id: &str, content: String) -> Result<FormRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let record = FormRecord {
            id,
            owner_id: owner_id.to_string(),
            content,
            published: false,
            created_at: now,
            updated_at: now,
        };
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn find(&self, id: FormId) -> Result<FormRecord, StoreError> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_content(&self, id: FormId, content: String) -> Result<FormRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.content = content;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn set_published(&self, id: FormId, published: bool) -> Result<FormRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.published = published;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn remove(&self, id: FormId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FormRecord>, StoreError> {
        let inner = self.inner.read().await;
        let mut records: Vec<FormRecord> = inner
            .records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
