use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::session_cookie::session_cookie;
use crate::auth::application::domain::entities::{SessionGrant, User, UserRole};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address (case-insensitive)
    #[schema(example = "admin@techcraft.com")]
    pub email: String,

    /// Password
    #[schema(example = "password")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Signed session token; also set as the `techcraft_session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    pub expires_at: DateTime<Utc>,

    pub user: SessionUser,
}

/// The user carried by the session
#[derive(Serialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Admin User")]
    pub name: String,
    #[schema(example = "admin@techcraft.com")]
    pub email: String,
    #[schema(value_type = String, example = "admin")]
    pub role: UserRole,
    #[schema(example = "/avatars/admin.png")]
    pub avatar: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            avatar: user.avatar,
        }
    }
}

impl From<SessionGrant> for SessionResponse {
    fn from(grant: SessionGrant) -> Self {
        Self {
            token: grant.token,
            expires_at: grant.expires_at,
            user: grant.user.into(),
        }
    }
}

/// User login
///
/// Matches the email against the account directory and starts a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<SessionResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresAt": "2026-01-01T00:00:00Z",
                    "user": {
                        "id": "1",
                        "name": "Admin User",
                        "email": "admin@techcraft.com",
                        "role": "admin",
                        "avatar": "/avatars/admin.png"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Malformed email or empty password",
            body = ErrorResponse
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(grant) => {
            info!(
                user_id = %grant.user.id,
                role = grant.user.role.as_str(),
                "User logged in successfully"
            );
            let cookie = session_cookie(grant.token.clone(), grant.expires_at);
            ApiResponse::success_with_cookie(SessionResponse::from(grant), cookie)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
