use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::entities::ProjectPatch;
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

#[patch("/api/admin/projects/{project_id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = RecordId::from(path.into_inner());

    match data.projects.update(&project_id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
