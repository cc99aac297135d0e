use actix_web::{get, web, Responder};

use crate::modules::team::application::domain::entities::TeamMemberFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/team")]
pub async fn get_team_handler(
    query: web::Query<TeamMemberFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.team.list(&query.into_inner()).await)
}
