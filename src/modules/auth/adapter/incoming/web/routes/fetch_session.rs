use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

use super::login_user::SessionUser;

/// Current session user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Restored session user", body = inline(crate::api::schemas::SuccessResponse<SessionUser>)),
        (status = 401, description = "No valid session", body = crate::api::schemas::ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/auth/me")]
pub async fn fetch_session_handler(auth: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(SessionUser::from(auth.user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_me_returns_session_user() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(fetch_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(UserRole::Student))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["email"], "student@techcraft.com");
        assert_eq!(body["data"]["role"], "student");
    }

    #[actix_web::test]
    async fn test_me_without_session_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(fetch_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
