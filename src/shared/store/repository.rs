// src/shared/store/repository.rs

use async_trait::async_trait;

use super::record::{Record, RecordId};

//
// ──────────────────────────────────────────────────────────
// Port (one collection of one record type)
// ──────────────────────────────────────────────────────────
// Operations never fail: a missing id is reported through the
// return value and leaves the collection untouched.
//

#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// Snapshot in insertion order.
    async fn list(&self) -> Vec<T>;

    async fn find(&self, id: &RecordId) -> Option<T>;

    /// Append. No uniqueness check on any field.
    async fn insert(&self, record: T) -> T;

    /// Shallow merge into the record with `id`; `None` when absent.
    async fn update(&self, id: &RecordId, patch: T::Patch) -> Option<T>;

    /// Remove the record with `id`; `false` when absent.
    async fn delete(&self, id: &RecordId) -> bool;

    async fn count(&self) -> usize {
        self.list().await.len()
    }
}
