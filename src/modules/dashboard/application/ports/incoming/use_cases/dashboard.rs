use async_trait::async_trait;

use crate::modules::dashboard::application::domain::overview::{AdminOverview, StudentOverview};
use crate::shared::store::RecordId;

#[async_trait]
pub trait DashboardUseCases: Send + Sync {
    async fn admin_overview(&self) -> AdminOverview;

    async fn student_overview(&self, student_id: &RecordId) -> StudentOverview;
}
