//! Authorization-gated persistence actions
//!
//! Every mutating operation (update, publish, delete) resolves the acting
//! principal, loads the stored record, and checks ownership before touching
//! the store. Authorization and validation failures are terminal typed
//! results for the requested operation; they are never retried here and
//! they perform no write. Store failures are surfaced as-is.

use std::sync::Arc;

use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::form::{validate, FormContent, FormId, PrincipalId, ValidationError};
use crate::store::{FormRecord, FormStore, StoreError};

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("User not found")]
    Unauthenticated,

    #[error("Form not found")]
    NotFound(FormId),

    #[error("Unauthorized to access this form")]
    Unauthorized,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Storage error: {0}")]
    Persistence(String),
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ActionError::NotFound(id),
            other => ActionError::Persistence(other.to_string()),
        }
    }
}

/// Source of the acting principal (the authentication provider boundary).
#[async_trait::async_trait]
pub trait PrincipalProvider: Send + Sync {
    /// The current principal's id, or `None` when unauthenticated.
    async fn current_principal(&self) -> Option<PrincipalId>;
}

/// Fixed principal, for tests and single-user embedding.
pub struct StaticPrincipal(pub Option<PrincipalId>);

#[async_trait::async_trait]
impl PrincipalProvider for StaticPrincipal {
    async fn current_principal(&self) -> Option<PrincipalId> {
        self.0.clone()
    }
}

/// Fire-and-forget cache/view invalidation after a successful mutation.
/// Invalidation is owned by the embedding application and cannot affect the
/// outcome of the action that triggered it.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, path: &str);
}

/// Default invalidator that does nothing.
pub struct NoopInvalidator;

impl CacheInvalidator for NoopInvalidator {
    fn invalidate(&self, _path: &str) {}
}

/// Action surface over one store and one principal source.
pub struct FormActions {
    store: Arc<dyn FormStore>,
    auth: Arc<dyn PrincipalProvider>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl FormActions {
    pub fn new(store: Arc<dyn FormStore>, auth: Arc<dyn PrincipalProvider>) -> Self {
        Self {
            store,
            auth,
            invalidator: Arc::new(NoopInvalidator),
        }
    }

    pub fn with_invalidator(mut self, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        self.invalidator = invalidator;
        self
    }

    /// Resolve the principal and load the record, requiring ownership.
    async fn authorize(&self, id: FormId) -> Result<FormRecord, ActionError> {
        let principal = self
            .auth
            .current_principal()
            .await
            .ok_or(ActionError::Unauthenticated)?;

        let record = self.store.find(id).await?;
        if record.owner_id != principal {
            log::warn!(
                "Principal {} denied access to form {} owned by {}",
                principal,
                id,
                record.owner_id
            );
            return Err(ActionError::Unauthorized);
        }

        Ok(record)
    }

    fn invalidate_form_views(&self, id: FormId) {
        self.invalidator
            .invalidate(&format!("/dashboard/forms/edit/{}", id));
        self.invalidator.invalidate("/dashboard/forms");
    }

    /// Auth-gated read for the editor page.
    pub async fn get_form_for_edit(&self, id: FormId) -> Result<FormRecord, ActionError> {
        self.authorize(id).await
    }

    /// Validate, encode, and atomically replace a form's document.
    pub async fn update_form(
        &self,
        id: FormId,
        content: &FormContent,
    ) -> Result<FormRecord, ActionError> {
        let record = self.authorize(id).await?;
        validate(content)?;
        let document = codec::encode(content)?;

        let updated = self.store.update_content(record.id, document).await?;
        log::info!("Form {} updated", id);

        self.invalidate_form_views(id);
        Ok(updated)
    }

    /// Mark a form as published. Publishing an already-published form is a
    /// no-op success; there is no unpublish transition.
    pub async fn publish_form(&self, id: FormId) -> Result<FormRecord, ActionError> {
        let record = self.authorize(id).await?;
        if record.published {
            return Ok(record);
        }

        let published = self.store.set_published(id, true).await?;
        log::info!("Form {} published", id);

        self.invalidate_form_views(id);
        Ok(published)
    }

    /// Delete a form. The shareable link dies with the record.
    pub async fn delete_form(&self, id: FormId) -> Result<(), ActionError> {
        self.authorize(id).await?;
        self.store.remove(id).await?;
        log::info!("Form {} deleted", id);

        self.invalidate_form_views(id);
        Ok(())
    }

    /// List the acting principal's own forms.
    pub async fn list_forms(&self) -> Result<Vec<FormRecord>, ActionError> {
        let principal = self
            .auth
            .current_principal()
            .await
            .ok_or(ActionError::Unauthenticated)?;
        Ok(self.store.list_by_owner(&principal).await?)
    }
}
