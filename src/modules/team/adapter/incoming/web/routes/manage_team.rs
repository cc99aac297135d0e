use actix_web::{delete, patch, post, web, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::team::application::domain::entities::{TeamMemberDraft, TeamMemberPatch};
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

fn member_not_found() -> HttpResponse {
    ApiResponse::not_found("TEAM_MEMBER_NOT_FOUND", "Team member not found")
}

#[post("/api/admin/team")]
pub async fn create_team_member_handler(
    _admin: AdminUser,
    req: web::Json<TeamMemberDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::created(data.team.create(req.into_inner()).await)
}

#[patch("/api/admin/team/{member_id}")]
pub async fn patch_team_member_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<TeamMemberPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.team.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => member_not_found(),
    }
}

#[delete("/api/admin/team/{member_id}")]
pub async fn delete_team_member_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.team.delete(&RecordId::from(path.into_inner())).await {
        Ok(()) => ApiResponse::no_content(),
        Err(CrudError::NotFound { .. }) => member_not_found(),
    }
}
