//! Generic resource controller
//!
//! One controller serves every [`Resource`]. Id-scoped operations start with
//! an existence check that borrows the record out of the locked collection;
//! validation and mutation then work on that borrow while the lock is held.

use crate::core::error::{ApiError, ApiResult};
use crate::core::id::IdGenerator;
use crate::core::resource::{Deletable, Resource};
use crate::core::validation::validators::matching_id;
use crate::storage::SharedCollection;
use serde_json::Value;
use std::sync::Arc;

/// List/create/read/update (and delete, for [`Deletable`] resources)
pub struct ResourceController<R> {
    records: SharedCollection<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R> Clone for ResourceController<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            ids: self.ids.clone(),
        }
    }
}

impl<R: Resource> ResourceController<R> {
    pub fn new(records: SharedCollection<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { records, ids }
    }

    /// Every record, in insertion order
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.all()
    }

    /// Validate, assign an id, and append
    pub async fn create(&self, data: &Value) -> ApiResult<R> {
        let draft = R::validate_create(data)?;

        let mut records = self.records.write().await;
        let id = records
            .allocate_id(self.ids.as_ref())
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        let record = records
            .push(R::from_draft(id, draft))
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .clone();

        tracing::info!(entity = R::LABEL, id = record.id(), "created");
        Ok(record)
    }

    /// Existence check followed by a read
    pub async fn read(&self, id: &str) -> ApiResult<R> {
        let records = self.records.read().await;
        Ok(records.find(id)?.clone())
    }

    /// Existence check, id agreement, field rules, then an in-place update
    pub async fn update(&self, route_id: &str, data: &Value) -> ApiResult<R> {
        let mut records = self.records.write().await;
        let record = records.find_mut(route_id)?;

        matching_id(data, R::LABEL, route_id)?;
        let changes = R::validate_update(data)?;
        record.apply(changes);

        tracing::info!(entity = R::LABEL, id = route_id, "updated");
        Ok(record.clone())
    }
}

impl<R: Deletable> ResourceController<R> {
    /// Existence check, deletion guard, then removal
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let mut records = self.records.write().await;
        records.find(id)?.ensure_deletable()?;
        records.remove(id);

        tracing::info!(entity = R::LABEL, id, "deleted");
        Ok(())
    }
}
