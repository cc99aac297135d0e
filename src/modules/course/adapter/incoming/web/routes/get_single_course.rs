use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::shared::store::RecordId;
use crate::AppState;

/// Public course detail. Draft and archived courses are reported as missing.
#[get("/api/courses/{course_id}")]
pub async fn get_single_course_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.courses.get(&RecordId::from(path.into_inner())).await {
        Ok(course) if course.is_active() => ApiResponse::success(course),
        _ => ApiResponse::not_found("COURSE_NOT_FOUND", "Course Not Found"),
    }
}
