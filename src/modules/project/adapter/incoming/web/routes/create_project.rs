use actix_web::{post, web, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::entities::ProjectDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    admin: AdminUser,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project = data.projects.create(req.into_inner()).await;

    info!(project_id = %project.id, admin_id = %admin.0.id, "Project created");
    ApiResponse::created(project)
}
