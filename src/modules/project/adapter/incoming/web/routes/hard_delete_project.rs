use actix_web::{delete, web, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

#[delete("/api/admin/projects/{project_id}")]
pub async fn hard_delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = RecordId::from(path.into_inner());

    match data.projects.delete(&project_id).await {
        Ok(()) => {
            info!(%project_id, "Project deleted");
            ApiResponse::no_content()
        }
        Err(CrudError::NotFound { .. }) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
