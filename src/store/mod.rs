//! Persistence gateway for stored forms
//!
//! The core consumes storage through the `FormStore` trait; each write is a
//! single atomic document replace, so there is no multi-step transaction to
//! roll back. No optimistic concurrency control: when two sessions save the
//! same form, the later successful write wins.

pub mod local;
pub mod memory;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::{FormId, PrincipalId};

pub use local::LocalStore;
pub use memory::MemoryStore;

/// Error types for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Form not found: {0}")]
    NotFound(FormId),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// One stored form row.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    pub owner_id: PrincipalId,
    /// Canonical JSON document text (see [`crate::codec`]).
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trait for form persistence providers
#[async_trait::async_trait]
pub trait FormStore: Send + Sync {
    /// Insert a new form and assign its id.
    async fn create(&self, owner_id: &str, content: String) -> Result<FormRecord, StoreError>;

    /// Fetch a form by id.
    async fn find(&self, id: FormId) -> Result<FormRecord, StoreError>;

    /// Atomically replace a form's document text.
    async fn update_content(&self, id: FormId, content: String) -> Result<FormRecord, StoreError>;

    /// Set the published flag.
    async fn set_published(&self, id: FormId, published: bool) -> Result<FormRecord, StoreError>;

    /// Delete a form by id.
    async fn remove(&self, id: FormId) -> Result<(), StoreError>;

    /// List all forms belonging to one owner, oldest first.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FormRecord>, StoreError>;
}

/// Configuration for store providers
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base directory for file-backed storage
    pub base_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./formsmith_data"),
        }
    }
}
