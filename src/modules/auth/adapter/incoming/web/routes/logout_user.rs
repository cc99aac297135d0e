use crate::auth::adapter::incoming::web::extractors::auth::session_token;
use crate::auth::adapter::incoming::web::session_cookie::removal_cookie;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Logout
///
/// Always succeeds. A valid session token is revoked and the cookie is cleared.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cleared", body = inline(crate::api::schemas::SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = session_token(&req);

    info!(has_session = token.is_some(), "User logout");
    data.auth.logout.execute(token.as_deref()).await;

    ApiResponse::success_with_cookie(
        LogoutResponseBody {
            message: "Logged out successfully".to_string(),
        },
        removal_cookie(),
    )
}
