use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::auth::adapter::outgoing::account_directory_memory::InMemoryAccountDirectory;
use crate::auth::adapter::outgoing::token_blacklist_memory::InMemoryTokenBlacklist;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, logout_user::LogoutUseCase, register_user::RegisterUserUseCase,
    restore_session::RestoreSessionUseCase,
};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::service::SubmitContactService;
use crate::modules::course::application::domain::enrollment::Enrollment;
use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::service::EnrollmentService;
use crate::modules::dashboard::application::service::DashboardService;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::service::application::domain::entities::Service;
use crate::modules::team::application::domain::entities::TeamMember;
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::seed;
use crate::shared::store::{CrudService, IdGenerator, InMemoryRepository, Record, UuidIdGenerator};
use crate::AppState;

/// The single canonical copy of every collection. Every use case reads and
/// writes through these handles, so the public pages, the admin screens and
/// the dashboards always agree.
#[derive(Clone)]
pub struct RecordStore {
    pub projects: Arc<InMemoryRepository<Project>>,
    pub services: Arc<InMemoryRepository<Service>>,
    pub testimonials: Arc<InMemoryRepository<Testimonial>>,
    pub team: Arc<InMemoryRepository<TeamMember>>,
    pub courses: Arc<InMemoryRepository<Course>>,
    pub enrollments: Arc<InMemoryRepository<Enrollment>>,
    pub messages: Arc<InMemoryRepository<ContactMessage>>,
    pub accounts: Arc<InMemoryAccountDirectory>,
    pub revoked_tokens: Arc<InMemoryTokenBlacklist>,
}

/// Artificial delays applied by the login and contact use cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    pub login: Duration,
    pub contact: Duration,
}

impl RecordStore {
    /// Empty collections; the demo accounts are always present.
    pub fn empty() -> Self {
        Self {
            projects: Arc::new(InMemoryRepository::new()),
            services: Arc::new(InMemoryRepository::new()),
            testimonials: Arc::new(InMemoryRepository::new()),
            team: Arc::new(InMemoryRepository::new()),
            courses: Arc::new(InMemoryRepository::new()),
            enrollments: Arc::new(InMemoryRepository::new()),
            messages: Arc::new(InMemoryRepository::new()),
            accounts: Arc::new(InMemoryAccountDirectory::with_demo_accounts()),
            revoked_tokens: Arc::new(InMemoryTokenBlacklist::new()),
        }
    }

    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            projects: Arc::new(InMemoryRepository::seeded(seed::projects())),
            services: Arc::new(InMemoryRepository::seeded(seed::services())),
            testimonials: Arc::new(InMemoryRepository::seeded(seed::testimonials())),
            team: Arc::new(InMemoryRepository::seeded(seed::team())),
            courses: Arc::new(InMemoryRepository::seeded(seed::courses())),
            enrollments: Arc::new(InMemoryRepository::seeded(seed::enrollments(now))),
            messages: Arc::new(InMemoryRepository::seeded(seed::messages(now))),
            ..Self::empty()
        }
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService {
            projects: self.projects.clone(),
            services: self.services.clone(),
            testimonials: self.testimonials.clone(),
            team: self.team.clone(),
            courses: self.courses.clone(),
            enrollments: self.enrollments.clone(),
            messages: self.messages.clone(),
        }
    }

    pub fn auth_use_cases(
        &self,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        ids: Arc<dyn IdGenerator + Send + Sync>,
        login_latency: Duration,
    ) -> AuthUseCases {
        AuthUseCases {
            login: Arc::new(LoginUserUseCase::new(
                self.accounts.clone(),
                token_provider.clone(),
                login_latency,
            )),
            register: Arc::new(RegisterUserUseCase::new(
                self.accounts.clone(),
                token_provider.clone(),
                ids,
            )),
            logout: Arc::new(LogoutUseCase::new(
                self.revoked_tokens.clone(),
                token_provider.clone(),
            )),
            restore_session: Arc::new(RestoreSessionUseCase::new(
                token_provider,
                self.revoked_tokens.clone(),
            )),
        }
    }

    /// Wire every use case over this store.
    pub fn app_state(
        &self,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        latency: Latency,
    ) -> AppState {
        let ids: Arc<dyn IdGenerator + Send + Sync> = Arc::new(UuidIdGenerator);

        AppState {
            projects: crud(&self.projects, &ids),
            services: crud(&self.services, &ids),
            testimonials: crud(&self.testimonials, &ids),
            team: crud(&self.team, &ids),
            courses: crud(&self.courses, &ids),
            messages: crud(&self.messages, &ids),
            contact: Arc::new(SubmitContactService::new(
                self.messages.clone(),
                ids.clone(),
                latency.contact,
            )),
            enrollments: Arc::new(EnrollmentService::new(self.enrollments.clone(), ids.clone())),
            dashboard: Arc::new(self.dashboard_service()),
            auth: self.auth_use_cases(token_provider, ids, latency.login),
        }
    }
}

fn crud<T: Record>(
    repository: &Arc<InMemoryRepository<T>>,
    ids: &Arc<dyn IdGenerator + Send + Sync>,
) -> Arc<CrudService<T>> {
    Arc::new(CrudService::new(repository.clone(), ids.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::{AllRecords, RecordRepository};
    use crate::tests::support::auth_helper::test_token_service;

    #[tokio::test]
    async fn test_empty_store_has_no_records() {
        let store = RecordStore::empty();

        assert_eq!(store.projects.count().await, 0);
        assert_eq!(store.courses.count().await, 0);
        assert_eq!(store.messages.count().await, 0);
    }

    #[tokio::test]
    async fn test_writes_through_one_handle_are_seen_by_all_views() {
        let store = RecordStore::seeded();
        let state = store.app_state(Arc::new(test_token_service()), Latency::default());

        state.messages.delete(&"1".into()).await.unwrap();

        assert_eq!(store.messages.count().await, 2);
        let overview = state.dashboard.admin_overview().await;
        assert_eq!(overview.counts.messages, 2);
        assert_eq!(state.messages.list(&AllRecords).await.len(), 2);
    }
}
