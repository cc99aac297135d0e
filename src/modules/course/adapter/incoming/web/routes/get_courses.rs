use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::course::application::domain::entities::{
    sort_courses, Course, CourseFilter, CourseLevel, CourseSort, CourseStatus,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
pub struct GetCoursesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub sort: Option<CourseSort>,
}

impl GetCoursesQuery {
    fn into_parts(self) -> (CourseFilter, Option<CourseSort>) {
        let filter = CourseFilter {
            search: self.search,
            category: self.category,
            level: self.level,
            status: self.status,
        };
        (filter, self.sort)
    }
}

async fn list_sorted(data: &AppState, filter: CourseFilter, sort: Option<CourseSort>) -> Vec<Course> {
    let mut courses = data.courses.list(&filter).await;
    sort_courses(&mut courses, sort);
    courses
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Catalogue page: active courses only, whatever `status` was asked for.
#[get("/api/courses")]
pub async fn get_courses_handler(
    query: web::Query<GetCoursesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (mut filter, sort) = query.into_inner().into_parts();
    filter.status = Some(CourseStatus::Active);

    ApiResponse::success(list_sorted(&data, filter, sort).await)
}

#[get("/api/admin/courses")]
pub async fn get_admin_courses_handler(
    _admin: AdminUser,
    query: web::Query<GetCoursesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, sort) = query.into_inner().into_parts();

    ApiResponse::success(list_sorted(&data, filter, sort).await)
}
