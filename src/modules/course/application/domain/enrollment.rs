use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::store::{Record, RecordId};

pub const COMPLETE_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Paused,
}

/// A student's place in a course. `course_id` is not checked against the
/// course collection and may dangle after a course is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: RecordId,
    pub student_id: RecordId,
    pub course_id: RecordId,
    pub progress: u8,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct EnrollmentDraft {
    pub student_id: RecordId,
    pub course_id: RecordId,
    pub enrolled_at: DateTime<Utc>,
}

/// Changes a student can make to their own enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentPatch {
    /// Progress is clamped to 100. Reaching 100 completes the enrollment;
    /// dropping below 100 reopens a completed one.
    Progress { progress: u8, at: DateTime<Utc> },
    /// Active becomes paused. Other states are left as they are.
    Pause,
    /// Paused becomes active. Other states are left as they are.
    Resume,
}

impl EnrollmentPatch {
    pub fn progress(progress: u32, at: DateTime<Utc>) -> Self {
        let progress = progress.min(u32::from(COMPLETE_PROGRESS)) as u8;
        EnrollmentPatch::Progress { progress, at }
    }
}

impl Record for Enrollment {
    type Draft = EnrollmentDraft;
    type Patch = EnrollmentPatch;

    const KIND: &'static str = "Enrollment";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: EnrollmentDraft) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            course_id: draft.course_id,
            progress: 0,
            status: EnrollmentStatus::Active,
            enrolled_at: draft.enrolled_at,
            completed_at: None,
        }
    }

    fn apply_patch(&mut self, patch: EnrollmentPatch) {
        match patch {
            EnrollmentPatch::Progress { progress, at } => {
                self.progress = progress;
                if progress == COMPLETE_PROGRESS {
                    self.status = EnrollmentStatus::Completed;
                    // first completion time wins
                    self.completed_at.get_or_insert(at);
                } else if self.status == EnrollmentStatus::Completed {
                    self.status = EnrollmentStatus::Active;
                    self.completed_at = None;
                }
            }
            EnrollmentPatch::Pause => {
                if self.status == EnrollmentStatus::Active {
                    self.status = EnrollmentStatus::Paused;
                }
            }
            EnrollmentPatch::Resume => {
                if self.status == EnrollmentStatus::Paused {
                    self.status = EnrollmentStatus::Active;
                }
            }
        }
    }
}
