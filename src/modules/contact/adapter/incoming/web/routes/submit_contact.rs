use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::{ContactMessage, MessagePriority};
use crate::modules::contact::application::ports::incoming::use_cases::ContactRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact form submission
#[derive(Deserialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Casey Morgan")]
    pub name: String,

    #[schema(example = "casey@example.com")]
    pub email: String,

    #[schema(example = "We'd like a quote for a new storefront.")]
    pub message: String,

    #[schema(example = "Project inquiry")]
    pub subject: Option<String>,

    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,

    pub priority: Option<MessagePriority>,
}

/// Submit the contact form
///
/// Stores the message with status `new`. Responds after a simulated delay.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<ContactMessage>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email format"
                }
            })
        ),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match ContactRequest::new(
        dto.name,
        dto.email,
        dto.message,
        dto.subject,
        dto.phone,
        dto.priority,
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected contact form");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let stored = data.contact.execute(request).await;
    info!(message_id = %stored.id, "Contact form accepted");

    ApiResponse::created(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::store::AllRecords;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_submit_contact_creates_new_message() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Casey",
                "email": "casey@example.com",
                "message": "Hello there",
                "priority": "high"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "new");
        assert_eq!(body["data"]["priority"], "high");
        assert!(body["data"]["date"].is_string());

        assert_eq!(state.messages.list(&AllRecords).await.len(), 1);
    }

    #[actix_web::test]
    async fn test_submit_contact_rejects_bad_email() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Casey",
                "email": "casey-at-example",
                "message": "Hello there"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(state.messages.list(&AllRecords).await.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(crate::shared::api::custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
