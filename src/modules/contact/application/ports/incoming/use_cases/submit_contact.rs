use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageDraft, MessagePriority,
};

// ========================= Contact Request =========================
/// Validated contact form
#[derive(Debug, Clone)]
pub struct ContactRequest {
    name: String,
    email: String,
    message: String,
    subject: Option<String>,
    phone: Option<String>,
    priority: Option<MessagePriority>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRequestError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Message cannot be empty")]
    EmptyMessage,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactRequest {
    pub fn new(
        name: String,
        email: String,
        message: String,
        subject: Option<String>,
        phone: Option<String>,
        priority: Option<MessagePriority>,
    ) -> Result<Self, ContactRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ContactRequestError::EmptyName);
        }

        let email = email.trim().to_string();
        if !EmailAddress::is_valid(&email) {
            return Err(ContactRequestError::InvalidEmailFormat);
        }

        if message.trim().is_empty() {
            return Err(ContactRequestError::EmptyMessage);
        }

        Ok(Self {
            name,
            email,
            message,
            subject: non_blank(subject),
            phone: non_blank(phone),
            priority,
        })
    }

    pub fn into_draft(self, date: DateTime<Utc>) -> ContactMessageDraft {
        ContactMessageDraft {
            name: self.name,
            email: self.email,
            message: self.message,
            subject: self.subject,
            phone: self.phone,
            priority: self.priority,
            date,
        }
    }
}

// ============================ Use case =============================
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// Stores the message as `new`, after the simulated round trip.
    async fn execute(&self, request: ContactRequest) -> ContactMessage;
}
