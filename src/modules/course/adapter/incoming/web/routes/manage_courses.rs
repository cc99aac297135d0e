use actix_web::{delete, patch, post, web, HttpResponse, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::course::application::domain::entities::{CourseDraft, CoursePatch};
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

fn course_not_found() -> HttpResponse {
    ApiResponse::not_found("COURSE_NOT_FOUND", "Course Not Found")
}

#[post("/api/admin/courses")]
pub async fn create_course_handler(
    _admin: AdminUser,
    req: web::Json<CourseDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course = data.courses.create(req.into_inner()).await;
    info!(course_id = %course.id, status = course.status.as_str(), "Course created");
    ApiResponse::created(course)
}

#[patch("/api/admin/courses/{course_id}")]
pub async fn patch_course_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<CoursePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = RecordId::from(path.into_inner());

    match data.courses.update(&course_id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => course_not_found(),
    }
}

/// Enrollments pointing at the course are left in place.
#[delete("/api/admin/courses/{course_id}")]
pub async fn delete_course_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = RecordId::from(path.into_inner());

    match data.courses.delete(&course_id).await {
        Ok(()) => {
            info!(%course_id, "Course deleted");
            ApiResponse::no_content()
        }
        Err(CrudError::NotFound { .. }) => course_not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;

    #[actix_web::test]
    async fn test_create_course_defaults_to_draft() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(create_course_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/courses")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({
                "title": "Rust for Web Developers",
                "description": "Ownership without tears",
                "instructor": "Sam Lee",
                "level": "Intermediate",
                "price": 129.0,
                "category": "Web Development",
                "curriculum": [{ "module": "Basics", "lessons": ["Borrowing"] }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "draft");
        assert_eq!(body["data"]["studentsEnrolled"], 0);
        assert_eq!(body["data"]["curriculum"][0]["lessons"][0], "Borrowing");
    }

    #[actix_web::test]
    async fn test_delete_course_keeps_enrollments() {
        let state = TestAppStateBuilder::default().seeded().build();
        let before = state.enrollments.list_all().await.len();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(delete_course_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/courses/1")
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.enrollments.list_all().await.len(), before);
    }

    #[actix_web::test]
    async fn test_patch_course_status() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().seeded().build())
                .service(patch_course_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/courses/4")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "status": "active" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["status"], "active");
        assert_eq!(body["data"]["title"], "Machine Learning Fundamentals");
    }
}
