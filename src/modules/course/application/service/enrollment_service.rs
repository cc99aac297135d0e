use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::modules::course::application::domain::enrollment::{
    Enrollment, EnrollmentDraft, EnrollmentPatch, EnrollmentStatus,
};
use crate::modules::course::application::ports::incoming::use_cases::{
    EnrollmentError, EnrollmentUseCases,
};
use crate::shared::store::{IdGenerator, Record, RecordId, RecordRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct EnrollmentService {
    repository: Arc<dyn RecordRepository<Enrollment> + Send + Sync>,
    ids: Arc<dyn IdGenerator + Send + Sync>,
}

impl EnrollmentService {
    pub fn new(
        repository: Arc<dyn RecordRepository<Enrollment> + Send + Sync>,
        ids: Arc<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self { repository, ids }
    }

    /// The enrollment, if it exists and belongs to `student_id`.
    async fn owned(
        &self,
        student_id: &RecordId,
        enrollment_id: &RecordId,
    ) -> Result<Enrollment, EnrollmentError> {
        match self.repository.find(enrollment_id).await {
            Some(e) if &e.student_id == student_id => Ok(e),
            _ => {
                debug!(%enrollment_id, %student_id, "Enrollment missing or owned by someone else");
                Err(EnrollmentError::NotFound(enrollment_id.clone()))
            }
        }
    }

    async fn apply(
        &self,
        enrollment_id: &RecordId,
        patch: EnrollmentPatch,
    ) -> Result<Enrollment, EnrollmentError> {
        self.repository
            .update(enrollment_id, patch)
            .await
            .ok_or_else(|| EnrollmentError::NotFound(enrollment_id.clone()))
    }
}

#[async_trait]
impl EnrollmentUseCases for EnrollmentService {
    async fn enroll(&self, student_id: &RecordId, course_id: RecordId) -> Enrollment {
        let enrollment = Enrollment::from_draft(
            self.ids.next_id(),
            EnrollmentDraft {
                student_id: student_id.clone(),
                course_id,
                enrolled_at: Utc::now(),
            },
        );

        info!(
            enrollment_id = %enrollment.id,
            %student_id,
            course_id = %enrollment.course_id,
            "Student enrolled"
        );
        self.repository.insert(enrollment).await
    }

    async fn list_for_student(&self, student_id: &RecordId) -> Vec<Enrollment> {
        self.repository
            .list()
            .await
            .into_iter()
            .filter(|e| &e.student_id == student_id)
            .collect()
    }

    async fn list_all(&self) -> Vec<Enrollment> {
        self.repository.list().await
    }

    async fn update_progress(
        &self,
        student_id: &RecordId,
        enrollment_id: &RecordId,
        progress: u32,
    ) -> Result<Enrollment, EnrollmentError> {
        self.owned(student_id, enrollment_id).await?;
        self.apply(enrollment_id, EnrollmentPatch::progress(progress, Utc::now()))
            .await
    }

    async fn set_paused(
        &self,
        student_id: &RecordId,
        enrollment_id: &RecordId,
        paused: bool,
    ) -> Result<Enrollment, EnrollmentError> {
        let current = self.owned(student_id, enrollment_id).await?;
        if current.status == EnrollmentStatus::Completed {
            return Err(EnrollmentError::AlreadyCompleted(enrollment_id.clone()));
        }

        let patch = if paused {
            EnrollmentPatch::Pause
        } else {
            EnrollmentPatch::Resume
        };
        let updated = self.apply(enrollment_id, patch).await?;
        info!(%enrollment_id, status = ?updated.status, "Enrollment status changed");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::{InMemoryRepository, UuidIdGenerator};

    fn service() -> EnrollmentService {
        EnrollmentService::new(
            Arc::new(InMemoryRepository::<Enrollment>::new()),
            Arc::new(UuidIdGenerator),
        )
    }

    fn id(value: &str) -> RecordId {
        RecordId::from(value)
    }

    #[tokio::test]
    async fn test_enroll_adds_exactly_one_active_enrollment() {
        let svc = service();
        let before = Utc::now();

        let e = svc.enroll(&id("2"), id("1")).await;

        let all = svc.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], e);
        assert_eq!(e.progress, 0);
        assert_eq!(e.status, EnrollmentStatus::Active);
        assert!(e.enrolled_at >= before && e.enrolled_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_enrolling_twice_is_allowed() {
        let svc = service();

        let first = svc.enroll(&id("2"), id("1")).await;
        let second = svc.enroll(&id("2"), id("1")).await;

        assert_ne!(first.id, second.id);
        assert_eq!(svc.list_for_student(&id("2")).await.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_course_is_accepted() {
        let svc = service();

        let e = svc.enroll(&id("2"), id("no-such-course")).await;

        assert_eq!(e.course_id, id("no-such-course"));
    }

    #[tokio::test]
    async fn test_list_for_student_filters_by_owner() {
        let svc = service();
        svc.enroll(&id("2"), id("1")).await;
        svc.enroll(&id("7"), id("1")).await;

        let mine = svc.list_for_student(&id("2")).await;

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].student_id, id("2"));
    }

    #[tokio::test]
    async fn test_update_progress_completes_at_100() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;

        let partial = svc.update_progress(&id("2"), &e.id, 55).await.unwrap();
        assert_eq!(partial.progress, 55);
        assert_eq!(partial.status, EnrollmentStatus::Active);

        let done = svc.update_progress(&id("2"), &e.id, 140).await.unwrap();
        assert_eq!(done.progress, 100);
        assert_eq!(done.status, EnrollmentStatus::Completed);
        assert!(done.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_progress_after_completion() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;

        let done = svc.update_progress(&id("2"), &e.id, 100).await.unwrap();
        let again = svc.update_progress(&id("2"), &e.id, 100).await.unwrap();
        assert_eq!(again.completed_at, done.completed_at);

        let reopened = svc.update_progress(&id("2"), &e.id, 40).await.unwrap();
        assert_eq!(reopened.progress, 40);
        assert_eq!(reopened.status, EnrollmentStatus::Active);
        assert!(reopened.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_pause_then_resume() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;

        let paused = svc.set_paused(&id("2"), &e.id, true).await.unwrap();
        assert_eq!(paused.status, EnrollmentStatus::Paused);

        let resumed = svc.set_paused(&id("2"), &e.id, false).await.unwrap();
        assert_eq!(resumed.status, EnrollmentStatus::Active);
    }

    #[tokio::test]
    async fn test_completed_enrollment_cannot_be_paused() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;
        svc.update_progress(&id("2"), &e.id, 100).await.unwrap();

        let err = svc.set_paused(&id("2"), &e.id, true).await.unwrap_err();

        assert_eq!(err, EnrollmentError::AlreadyCompleted(e.id.clone()));
    }

    #[tokio::test]
    async fn test_pausing_other_students_enrollment_is_not_found() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;

        let err = svc.set_paused(&id("99"), &e.id, true).await.unwrap_err();

        assert_eq!(err, EnrollmentError::NotFound(e.id.clone()));
        assert_eq!(svc.list_all().await[0].status, EnrollmentStatus::Active);
    }

    #[tokio::test]
    async fn test_update_progress_of_other_student_is_not_found() {
        let svc = service();
        let e = svc.enroll(&id("2"), id("1")).await;

        let err = svc.update_progress(&id("99"), &e.id, 10).await.unwrap_err();

        assert_eq!(err, EnrollmentError::NotFound(e.id.clone()));
        assert_eq!(svc.list_all().await[0].progress, 0);
    }

    #[tokio::test]
    async fn test_update_progress_unknown_id() {
        let svc = service();

        let err = svc
            .update_progress(&id("2"), &id("missing"), 10)
            .await
            .unwrap_err();

        assert_eq!(err, EnrollmentError::NotFound(id("missing")));
    }
}
