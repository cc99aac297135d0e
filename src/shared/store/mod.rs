mod crud;
mod memory;
mod patch;
mod record;
mod repository;
pub mod text;

pub use crud::{CrudError, CrudService, CrudUseCases};
pub use memory::InMemoryRepository;
pub use patch::{merge, PatchField};
pub use record::{AllRecords, IdGenerator, Record, RecordFilter, RecordId, UuidIdGenerator};
pub use repository::RecordRepository;
