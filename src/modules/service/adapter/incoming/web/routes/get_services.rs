use actix_web::{get, web, Responder};

use crate::modules::service::application::domain::entities::ServiceFilter;
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

#[get("/api/services")]
pub async fn get_services_handler(
    query: web::Query<ServiceFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.services.list(&query.into_inner()).await)
}

#[get("/api/services/{service_id}")]
pub async fn get_single_service_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.services.get(&RecordId::from(path.into_inner())).await {
        Ok(service) => ApiResponse::success(service),
        Err(CrudError::NotFound { .. }) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
    }
}
