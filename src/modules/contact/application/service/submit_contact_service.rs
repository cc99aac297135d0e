use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactRequest, SubmitContactUseCase,
};
use crate::shared::store::{IdGenerator, Record, RecordRepository};

pub struct SubmitContactService {
    messages: Arc<dyn RecordRepository<ContactMessage> + Send + Sync>,
    ids: Arc<dyn IdGenerator + Send + Sync>,
    latency: Duration,
}

impl SubmitContactService {
    pub fn new(
        messages: Arc<dyn RecordRepository<ContactMessage> + Send + Sync>,
        ids: Arc<dyn IdGenerator + Send + Sync>,
        latency: Duration,
    ) -> Self {
        Self {
            messages,
            ids,
            latency,
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, request: ContactRequest) -> ContactMessage {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let message = ContactMessage::from_draft(self.ids.next_id(), request.into_draft(Utc::now()));
        info!(message_id = %message.id, "Contact message received");

        self.messages.insert(message).await
    }
}
