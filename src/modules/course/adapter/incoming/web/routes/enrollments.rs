use actix_web::{get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, StudentUser};
use crate::modules::course::application::domain::enrollment::EnrollmentStatus;
use crate::modules::course::application::ports::incoming::use_cases::EnrollmentError;
use crate::shared::api::ApiResponse;
use crate::shared::store::RecordId;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub progress: u32,
}

/// `active` resumes, `paused` pauses.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: EnrollmentStatus,
}

fn enrollment_error(err: EnrollmentError) -> HttpResponse {
    match err {
        EnrollmentError::NotFound(_) => {
            ApiResponse::not_found("ENROLLMENT_NOT_FOUND", "Enrollment not found")
        }
        EnrollmentError::AlreadyCompleted(_) => {
            ApiResponse::conflict("ENROLLMENT_COMPLETED", "Enrollment is already completed")
        }
    }
}

#[post("/api/student/enrollments")]
pub async fn enroll_handler(
    student: StudentUser,
    req: web::Json<EnrollRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = RecordId::from(req.into_inner().course_id);
    let enrollment = data.enrollments.enroll(&student.0.id, course_id).await;

    ApiResponse::created(enrollment)
}

#[get("/api/student/enrollments")]
pub async fn get_my_enrollments_handler(
    student: StudentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.enrollments.list_for_student(&student.0.id).await)
}

#[patch("/api/student/enrollments/{enrollment_id}/progress")]
pub async fn update_progress_handler(
    student: StudentUser,
    path: web::Path<String>,
    req: web::Json<ProgressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let enrollment_id = RecordId::from(path.into_inner());

    match data
        .enrollments
        .update_progress(&student.0.id, &enrollment_id, req.progress)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => enrollment_error(e),
    }
}

#[patch("/api/student/enrollments/{enrollment_id}/status")]
pub async fn update_enrollment_status_handler(
    student: StudentUser,
    path: web::Path<String>,
    req: web::Json<StatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let paused = match req.status {
        EnrollmentStatus::Paused => true,
        EnrollmentStatus::Active => false,
        EnrollmentStatus::Completed => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Completion follows progress; use the progress endpoint",
            );
        }
    };
    let enrollment_id = RecordId::from(path.into_inner());

    match data
        .enrollments
        .set_paused(&student.0.id, &enrollment_id, paused)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => enrollment_error(e),
    }
}

#[get("/api/admin/enrollments")]
pub async fn get_all_enrollments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.enrollments.list_all().await)
}
