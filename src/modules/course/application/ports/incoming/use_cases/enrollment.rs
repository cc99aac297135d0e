use async_trait::async_trait;

use crate::modules::course::application::domain::enrollment::Enrollment;
use crate::shared::store::RecordId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    /// Unknown id, or an enrollment owned by another student.
    #[error("Enrollment not found: {0}")]
    NotFound(RecordId),
    /// Completed enrollments cannot be paused or resumed.
    #[error("Enrollment already completed: {0}")]
    AlreadyCompleted(RecordId),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EnrollmentUseCases: Send + Sync {
    /// Always appends; repeated enrollments and unknown courses are accepted.
    async fn enroll(&self, student_id: &RecordId, course_id: RecordId) -> Enrollment;

    async fn list_for_student(&self, student_id: &RecordId) -> Vec<Enrollment>;

    async fn list_all(&self) -> Vec<Enrollment>;

    async fn update_progress(
        &self,
        student_id: &RecordId,
        enrollment_id: &RecordId,
        progress: u32,
    ) -> Result<Enrollment, EnrollmentError>;

    /// Pause (`true`) or resume (`false`) one of the student's enrollments.
    async fn set_paused(
        &self,
        student_id: &RecordId,
        enrollment_id: &RecordId,
        paused: bool,
    ) -> Result<Enrollment, EnrollmentError>;
}
