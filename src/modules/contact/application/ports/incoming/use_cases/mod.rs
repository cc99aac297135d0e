mod submit_contact;

pub use submit_contact::{ContactRequest, ContactRequestError, SubmitContactUseCase};
