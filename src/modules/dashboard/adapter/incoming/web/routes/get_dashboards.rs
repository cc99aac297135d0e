use actix_web::{get, web, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, StudentUser};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard")]
pub async fn admin_dashboard_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.dashboard.admin_overview().await)
}

#[get("/api/student/dashboard")]
pub async fn student_dashboard_handler(
    student: StudentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.dashboard.student_overview(&student.0.id).await)
}
