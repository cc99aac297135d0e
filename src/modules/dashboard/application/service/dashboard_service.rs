use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::course::application::domain::enrollment::Enrollment;
use crate::modules::course::application::domain::entities::Course;
use crate::modules::dashboard::application::domain::overview::{
    AdminOverview, AdminSnapshot, StudentOverview,
};
use crate::modules::dashboard::application::ports::incoming::use_cases::DashboardUseCases;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::service::application::domain::entities::Service;
use crate::modules::team::application::domain::entities::TeamMember;
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::shared::store::{RecordId, RecordRepository};

/// Read-only view over every collection.
pub struct DashboardService {
    pub projects: Arc<dyn RecordRepository<Project> + Send + Sync>,
    pub services: Arc<dyn RecordRepository<Service> + Send + Sync>,
    pub testimonials: Arc<dyn RecordRepository<Testimonial> + Send + Sync>,
    pub team: Arc<dyn RecordRepository<TeamMember> + Send + Sync>,
    pub courses: Arc<dyn RecordRepository<Course> + Send + Sync>,
    pub enrollments: Arc<dyn RecordRepository<Enrollment> + Send + Sync>,
    pub messages: Arc<dyn RecordRepository<ContactMessage> + Send + Sync>,
}

#[async_trait]
impl DashboardUseCases for DashboardService {
    async fn admin_overview(&self) -> AdminOverview {
        AdminOverview::from_snapshot(AdminSnapshot {
            projects: self.projects.count().await,
            services: self.services.count().await,
            team: self.team.count().await,
            testimonials: self.testimonials.list().await,
            courses: self.courses.list().await,
            enrollments: self.enrollments.list().await,
            messages: self.messages.list().await,
        })
    }

    async fn student_overview(&self, student_id: &RecordId) -> StudentOverview {
        let mine: Vec<Enrollment> = self
            .enrollments
            .list()
            .await
            .into_iter()
            .filter(|e| &e.student_id == student_id)
            .collect();

        StudentOverview::build(mine, &self.courses.list().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[tokio::test]
    async fn test_overviews_from_seeded_store() {
        let store = RecordStore::seeded();
        let svc = store.dashboard_service();

        let admin = svc.admin_overview().await;
        assert_eq!(admin.counts.projects, 4);
        assert_eq!(admin.counts.courses, 4);
        assert_eq!(admin.total_enrollments, 3);
        // 199 + 149 + 179
        assert_eq!(admin.revenue, 527.0);

        let student = svc.student_overview(&RecordId::from("2")).await;
        assert_eq!(student.enrollments.len(), 2);
        assert_eq!(student.completed, 1);
        let recommended: Vec<_> = student.recommended.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(recommended, vec!["3"]);
    }
}
