use actix_web::{delete, patch, post, web, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::service::application::domain::entities::{ServiceDraft, ServicePatch};
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

fn service_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
}

#[post("/api/admin/services")]
pub async fn create_service_handler(
    _admin: AdminUser,
    req: web::Json<ServiceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service = data.services.create(req.into_inner()).await;
    info!(service_id = %service.id, "Service created");
    ApiResponse::created(service)
}

#[patch("/api/admin/services/{service_id}")]
pub async fn patch_service_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ServicePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service_id = RecordId::from(path.into_inner());

    match data.services.update(&service_id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => service_not_found(),
    }
}

#[delete("/api/admin/services/{service_id}")]
pub async fn delete_service_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.services.delete(&RecordId::from(path.into_inner())).await {
        Ok(()) => ApiResponse::no_content(),
        Err(CrudError::NotFound { .. }) => service_not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserRole;
    use crate::shared::store::AllRecords;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;

    #[actix_web::test]
    async fn test_service_lifecycle() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(create_service_handler)
                .service(patch_service_handler)
                .service(delete_service_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/services")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({
                "title": "SEO Audit",
                "description": "Find what holds your rankings back",
                "icon": "search",
                "features": ["Technical audit"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(body["data"]["price"].is_null());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/services/{}", id))
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "price": "Starting at $499" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["price"], "Starting at $499");
        assert_eq!(body["data"]["title"], "SEO Audit");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/services/{}", id))
            .insert_header(bearer(UserRole::Admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        assert!(state.services.list(&AllRecords).await.is_empty());
    }

    #[actix_web::test]
    async fn test_patch_missing_service_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(patch_service_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/admin/services/ghost")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({ "title": "X" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
