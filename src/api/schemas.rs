// src/api/schemas.rs
//! OpenAPI mirrors of the `ApiResponse` envelope.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": … }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `COURSE_NOT_FOUND`
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "Invalid email format")]
    pub message: String,
}
