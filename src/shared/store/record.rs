// src/shared/store/record.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Record identity
// ──────────────────────────────────────────────────────────
//

/// Opaque record identifier. Seed data uses short numeric strings,
/// records created at runtime get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId(Uuid::new_v4().to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Record contract
// ──────────────────────────────────────────────────────────
// Every collection follows the same shape:
// - Draft: the entity without its id (what a form submits)
// - Patch: partial update, applied as a shallow merge
//

pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// Used in logs and not-found messages.
    const KIND: &'static str;

    fn id(&self) -> &RecordId;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Listing predicate. Filters are plain values built from query strings.
pub trait RecordFilter<T>: Send + Sync {
    fn matches(&self, record: &T) -> bool;
}

/// Matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRecords;

impl<T> RecordFilter<T> for AllRecords {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_yields_distinct_ids() {
        let ids = UuidIdGenerator;
        let generated: HashSet<RecordId> = (0..100).map(|_| ids.next_id()).collect();

        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn test_record_id_serializes_as_plain_string() {
        let id = RecordId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let back: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back.as_str(), "abc");
    }
}
