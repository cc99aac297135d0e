use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LogoutResponseBody, RegisterRequestDto, SessionResponse, SessionUser,
};
use crate::modules::contact::adapter::incoming::web::routes::ContactRequestDto;
use crate::modules::contact::application::domain::entities::{
    ContactMessage, MessagePriority, MessageStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TechCraft API",
        version = "1.0.0",
        description = "Agency site backend: catalogue, academy, contact inbox and mock sessions",
        contact(
            name = "API Support",
            email = "support@techcraft.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_session_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SessionResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            RegisterRequestDto,
            SessionResponse,
            SessionUser,
            LogoutResponseBody,

            // Contact
            ContactRequestDto,
            ContactMessage,
            MessageStatus,
            MessagePriority
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Mock session endpoints"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
