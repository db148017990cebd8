//! Resource traits shared by every entity the API exposes

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A record type served through the generic resource controller
///
/// Each implementation supplies its own rule set: how a create payload
/// becomes a draft, and how an update payload becomes a set of changes.
/// Both validations run before anything is written, so a rejected request
/// never leaves a partial update behind.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Validated create payload
    type Draft: Send;

    /// Validated update payload
    type Changes: Send;

    /// Name used in messages (e.g., "Dish")
    const LABEL: &'static str;

    /// Route segment for the collection (e.g., "dishes")
    const PLURAL: &'static str;

    /// The record's identifier
    fn id(&self) -> &str;

    /// Check a create payload
    fn validate_create(data: &Value) -> Result<Self::Draft, ValidationError>;

    /// Build the record once an id has been allocated
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Check an update payload
    fn validate_update(data: &Value) -> Result<Self::Changes, ValidationError>;

    /// Overwrite every mutable field; the id is left alone
    fn apply(&mut self, changes: Self::Changes);
}

/// Resources that may be removed from their collection
pub trait Deletable: Resource {
    /// Refuse deletion when the record's state forbids it
    fn ensure_deletable(&self) -> Result<(), ValidationError>;
}

/// The `{"data": ...}` wrapper used by every response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
