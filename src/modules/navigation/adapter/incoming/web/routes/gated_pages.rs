use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::CurrentSession;
use crate::auth::application::domain::entities::SessionState;
use crate::modules::navigation::application::domain::site_route::{
    resolve_access, Access, LOGIN_PATH,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn gate(req: &HttpRequest, session: &SessionState) -> Option<HttpResponse> {
    match resolve_access(req.path(), session) {
        Access::Allow => None,
        Access::NotFound => Some(ApiResponse::not_found("PAGE_NOT_FOUND", "Page Not Found")),
        Access::Pending | Access::RedirectToLogin => {
            info!(path = %req.path(), "Redirecting to login");
            Some(ApiResponse::see_other(LOGIN_PATH))
        }
    }
}

#[get("/admin")]
pub async fn admin_page_handler(
    req: HttpRequest,
    session: CurrentSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Some(redirect) = gate(&req, &session.0) {
        return redirect;
    }
    ApiResponse::success(data.dashboard.admin_overview().await)
}

#[get("/student")]
pub async fn student_page_handler(
    req: HttpRequest,
    session: CurrentSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Some(redirect) = gate(&req, &session.0) {
        return redirect;
    }
    match session.0.user() {
        Some(user) => ApiResponse::success(data.dashboard.student_overview(&user.id).await),
        None => ApiResponse::see_other(LOGIN_PATH),
    }
}
