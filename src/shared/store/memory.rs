// src/shared/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::record::{Record, RecordId};
use super::repository::RecordRepository;

/// Process-local collection. Everything is lost on restart.
pub struct InMemoryRepository<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn find(&self, id: &RecordId) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    async fn insert(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    async fn update(&self, id: &RecordId, patch: T::Patch) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == id)?;
        record.apply_patch(patch);
        Some(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        records.len() != before
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}
