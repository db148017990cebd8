//! In-memory collections
//!
//! Records are kept in insertion order. A collection is shared between
//! requests as [`SharedCollection`], behind a `tokio::sync::RwLock` so a
//! handler can hold the lock across its whole check-then-mutate chain.

use crate::core::error::{EntityError, StorageError};
use crate::core::id::IdGenerator;
use crate::core::resource::Resource;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// How many generated ids `allocate_id` tries before giving up
pub const MAX_ID_ATTEMPTS: usize = 16;

/// A collection shared across request handlers
pub type SharedCollection<R> = Arc<RwLock<Collection<R>>>;

/// Ordered records of a single resource type, keyed by id
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: IndexMap<String, R>,
}

impl<R: Resource> Collection<R> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Build a collection from existing records, e.g. seed data
    ///
    /// Each record must pass the same rules as a create request and ids
    /// must be unique.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Result<Self, StorageError> {
        let mut collection = Self::new();
        for record in records {
            let id = record.id().to_string();
            let json = serde_json::to_value(&record).map_err(|e| StorageError::Serialization {
                entity: R::LABEL,
                id: id.clone(),
                message: e.to_string(),
            })?;
            R::validate_create(&json).map_err(|source| StorageError::InvalidRecord {
                entity: R::LABEL,
                id: id.clone(),
                source,
            })?;
            if collection.records.contains_key(&id) {
                return Err(StorageError::DuplicateId {
                    entity: R::LABEL,
                    id,
                });
            }
            collection.records.insert(id, record);
        }
        Ok(collection)
    }

    /// Wrap the collection for sharing between handlers
    pub fn shared(self) -> SharedCollection<R> {
        Arc::new(RwLock::new(self))
    }

    /// All records, in insertion order
    pub fn all(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Existence check: the record with exactly this id
    pub fn find(&self, id: &str) -> Result<&R, EntityError> {
        self.records.get(id).ok_or_else(|| not_found::<R>(id))
    }

    /// Existence check for a record about to be mutated
    pub fn find_mut(&mut self, id: &str) -> Result<&mut R, EntityError> {
        self.records.get_mut(id).ok_or_else(|| not_found::<R>(id))
    }

    /// Ask `ids` for an identifier not already in use, at most
    /// [`MAX_ID_ATTEMPTS`] times
    pub fn allocate_id(&self, ids: &dyn IdGenerator) -> Result<String, StorageError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ids.next_id();
            if !self.records.contains_key(&id) {
                return Ok(id);
            }
            tracing::warn!(entity = R::LABEL, %id, "generated id already taken, retrying");
        }
        Err(StorageError::IdsExhausted {
            entity: R::LABEL,
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Append a record; its id must not already be present
    pub fn push(&mut self, record: R) -> Result<&R, StorageError> {
        let id = record.id().to_string();
        if self.records.contains_key(&id) {
            return Err(StorageError::DuplicateId {
                entity: R::LABEL,
                id,
            });
        }
        let (index, _) = self.records.insert_full(id, record);
        Ok(&self.records[index])
    }

    /// Remove a record, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<R> {
        self.records.shift_remove(id)
    }
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<R: Resource>(id: &str) -> EntityError {
    EntityError::NotFound {
        entity: R::LABEL,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::SequentialIdGenerator;
    use crate::entities::Dish;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: "tasty".to_string(),
            price: serde_json::Number::from_f64(4.5).unwrap(),
            image_url: "https://example.com/img.png".to_string(),
        }
    }

    #[test]
    fn test_from_records_keeps_order() {
        let collection =
            Collection::from_records(vec![dish("b", "Burrito"), dish("a", "Arepa")]).unwrap();
        let names: Vec<_> = collection.all().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Burrito", "Arepa"]);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = Collection::from_records(vec![dish("a", "One"), dish("a", "Two")]).unwrap_err();
        assert!(matches!(err, StorageError::DuplicateId { .. }));
    }

    #[test]
    fn test_from_records_rejects_invalid_record() {
        let mut bad = dish("a", "One");
        bad.price = 0.into();
        let err = Collection::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord { .. }));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_find_hit_and_miss() {
        let collection = Collection::from_records(vec![dish("a", "One")]).unwrap();
        assert_eq!(collection.find("a").unwrap().name, "One");
        let err = collection.find("zz").unwrap_err();
        assert_eq!(err.to_string(), "Dish id not found: zz");
    }

    #[test]
    fn test_find_is_exact_match() {
        let collection = Collection::from_records(vec![dish("abc", "One")]).unwrap();
        assert!(collection.find("ab").is_err());
        assert!(collection.find("ABC").is_err());
    }

    #[test]
    fn test_allocate_id_skips_taken_ids() {
        let collection = Collection::from_records(vec![dish("d-1", "One")]).unwrap();
        let ids = SequentialIdGenerator::new("d-");
        assert_eq!(collection.allocate_id(&ids).unwrap(), "d-2");
    }

    struct FixedIds;

    impl IdGenerator for FixedIds {
        fn next_id(&self) -> String {
            "a".to_string()
        }
    }

    #[test]
    fn test_allocate_id_gives_up_when_generator_repeats() {
        let collection = Collection::from_records(vec![dish("a", "One")]).unwrap();
        let err = collection.allocate_id(&FixedIds).unwrap_err();
        assert!(matches!(
            err,
            StorageError::IdsExhausted {
                entity: "Dish",
                attempts: MAX_ID_ATTEMPTS
            }
        ));
    }

    #[test]
    fn test_push_and_remove() {
        let mut collection = Collection::new();
        collection.push(dish("a", "One")).unwrap();
        collection.push(dish("b", "Two")).unwrap();
        collection.push(dish("c", "Three")).unwrap();
        assert!(collection.push(dish("b", "Again")).is_err());

        assert_eq!(collection.remove("b").map(|d| d.name), Some("Two".to_string()));
        assert!(collection.remove("b").is_none());

        let ids: Vec<_> = collection.all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(collection.len(), 2);
    }
}
