use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    register_user::IRegisterUserUseCase, restore_session::IRestoreSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub restore_session: Arc<dyn IRestoreSessionUseCase + Send + Sync>,
}
