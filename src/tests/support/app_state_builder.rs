use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::store::{Latency, RecordStore};
use crate::tests::support::auth_helper::test_token_service;
use crate::AppState;

/// Real in-memory wiring with test keys and no artificial latency.
/// Individual use cases can be swapped for mocks.
pub struct TestAppStateBuilder {
    store: RecordStore,
    login: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: RecordStore::empty(),
            login: None,
        }
    }
}

impl TestAppStateBuilder {
    /// Start from the demo catalogue instead of empty collections.
    pub fn seeded(mut self) -> Self {
        self.store = RecordStore::seeded();
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn build_state(self) -> AppState {
        let mut state = self
            .store
            .app_state(Arc::new(test_token_service()), Latency::default());

        if let Some(login) = self.login {
            state.auth.login = login;
        }
        state
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.build_state())
    }
}
