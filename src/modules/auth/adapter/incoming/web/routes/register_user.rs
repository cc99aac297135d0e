use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::session_cookie::session_cookie;
use crate::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::login_user::SessionResponse;

/// Request body for account registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Checked for presence only
    #[schema(example = "password")]
    pub password: String,
}

/// Register a student account
///
/// Creates a `student` account and signs it in straight away.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "Email already registered"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(dto.name, dto.email, &dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(request).await {
        Ok(grant) => {
            info!(user_id = %grant.user.id, "Student account registered");
            let cookie = session_cookie(grant.token.clone(), grant.expires_at);
            ApiResponse::created_with_cookie(SessionResponse::from(grant), cookie)
        }
        Err(RegisterError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }
        Err(RegisterError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
