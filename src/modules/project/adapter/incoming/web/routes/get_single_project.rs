use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = RecordId::from(path.into_inner());

    match data.projects.get(&project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(CrudError::NotFound { .. }) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
