//! Identifier generation for new records

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Supplies identifiers for newly created records
///
/// Collections ask for ids until they get one that is not already taken,
/// so an implementation only has to be unlikely to repeat itself.
pub trait IdGenerator: Send + Sync {
    /// Produce the next candidate id
    fn next_id(&self) -> String;
}

/// Random 32-character lowercase hex ids (a v4 UUID without hyphens)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids: `{prefix}1`, `{prefix}2`, ...
///
/// Handy for tests and demos where ids need to be predictable.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_32_hex_chars() {
        let id = UuidIdGenerator.next_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_uuid_ids_differ() {
        assert_ne!(UuidIdGenerator.next_id(), UuidIdGenerator.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("d-");
        assert_eq!(ids.next_id(), "d-1");
        assert_eq!(ids.next_id(), "d-2");
    }
}
