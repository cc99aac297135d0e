// src/shared/store/crud.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::record::{IdGenerator, Record, RecordFilter, RecordId};
use super::repository::RecordRepository;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrudError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CrudUseCases<T: Record>: Send + Sync {
    async fn list(&self, filter: &dyn RecordFilter<T>) -> Vec<T>;

    async fn get(&self, id: &RecordId) -> Result<T, CrudError>;

    /// Assigns a fresh id. Nothing is validated.
    async fn create(&self, draft: T::Draft) -> T;

    async fn update(&self, id: &RecordId, patch: T::Patch) -> Result<T, CrudError>;

    /// No cascade into dependent collections.
    async fn delete(&self, id: &RecordId) -> Result<(), CrudError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CrudService<T: Record> {
    repository: Arc<dyn RecordRepository<T> + Send + Sync>,
    ids: Arc<dyn IdGenerator + Send + Sync>,
}

impl<T: Record> CrudService<T> {
    pub fn new(
        repository: Arc<dyn RecordRepository<T> + Send + Sync>,
        ids: Arc<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self { repository, ids }
    }

    fn not_found(id: &RecordId) -> CrudError {
        CrudError::NotFound {
            kind: T::KIND,
            id: id.clone(),
        }
    }
}

#[async_trait]
impl<T: Record> CrudUseCases<T> for CrudService<T> {
    async fn list(&self, filter: &dyn RecordFilter<T>) -> Vec<T> {
        self.repository
            .list()
            .await
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    async fn get(&self, id: &RecordId) -> Result<T, CrudError> {
        self.repository
            .find(id)
            .await
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: T::Draft) -> T {
        let id = self.ids.next_id();
        debug!(kind = T::KIND, %id, "Creating record");
        self.repository.insert(T::from_draft(id, draft)).await
    }

    async fn update(&self, id: &RecordId, patch: T::Patch) -> Result<T, CrudError> {
        self.repository
            .update(id, patch)
            .await
            .ok_or_else(|| Self::not_found(id))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), CrudError> {
        if self.repository.delete(id).await {
            debug!(kind = T::KIND, %id, "Deleted record");
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }
}
