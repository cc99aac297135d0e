use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, PatchField, Record, RecordFilter, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 4] = [
        MessageStatus::New,
        MessageStatus::Read,
        MessageStatus::Replied,
        MessageStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
            MessageStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    Low,
    Medium,
    High,
}

/// A contact-form submission as seen in the admin inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[schema(value_type = String, example = "3f1c...")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
    pub phone: Option<String>,
    pub date: DateTime<Utc>,
    pub status: MessageStatus,
    pub priority: Option<MessagePriority>,
}

#[derive(Debug, Clone)]
pub struct ContactMessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
    pub phone: Option<String>,
    pub priority: Option<MessagePriority>,
    pub date: DateTime<Utc>,
}

/// Inbox triage: status and priority only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessagePatch {
    pub status: Option<MessageStatus>,
    #[serde(default)]
    pub priority: PatchField<MessagePriority>,
}

impl Record for ContactMessage {
    type Draft = ContactMessageDraft;
    type Patch = ContactMessagePatch;

    const KIND: &'static str = "ContactMessage";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ContactMessageDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            message: draft.message,
            subject: draft.subject,
            phone: draft.phone,
            date: draft.date,
            status: MessageStatus::New,
            priority: draft.priority,
        }
    }

    fn apply_patch(&mut self, patch: ContactMessagePatch) {
        merge(&mut self.status, patch.status);
        patch.priority.apply_to(&mut self.priority);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessageFilter {
    pub search: Option<String>,
    pub status: Option<MessageStatus>,
    pub priority: Option<MessagePriority>,
}

impl RecordFilter<ContactMessage> for ContactMessageFilter {
    fn matches(&self, m: &ContactMessage) -> bool {
        if let Some(term) = non_blank(self.search.as_deref()) {
            let fields = [
                m.name.as_str(),
                m.email.as_str(),
                m.subject.as_deref().unwrap_or_default(),
                m.message.as_str(),
            ];
            if !any_contains(fields, term) {
                return false;
            }
        }

        self.status.map_or(true, |s| m.status == s)
            && self.priority.map_or(true, |p| m.priority == Some(p))
    }
}
