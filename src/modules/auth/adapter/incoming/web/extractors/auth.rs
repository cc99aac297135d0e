use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::application::domain::entities::{SessionState, User, UserRole};
use crate::{shared::api::ApiResponse, AppState};

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Bearer header first, then the session cookie.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Resolved session of the caller; never rejects the request.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionState);

impl FromRequest for CurrentSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move {
            let state =
                state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let session = state.auth.restore_session.execute(token.as_deref()).await;
            Ok(CurrentSession(session))
        })
    }
}

/// Represents a caller with a valid session (any role)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move {
            let state =
                state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_SESSION",
                    "Login required",
                ))
            })?;

            match state.auth.restore_session.execute(Some(&token)).await {
                SessionState::Authenticated(user) => Ok(AuthenticatedUser { user, token }),
                _ => Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_SESSION",
                    "Invalid or expired session",
                ))),
            }
        })
    }
}

fn require_role(auth: AuthenticatedUser, role: UserRole) -> Result<User, ActixError> {
    if auth.user.has_role(role) {
        Ok(auth.user)
    } else {
        tracing::warn!(
            user_id = %auth.user.id,
            role = auth.user.role.as_str(),
            required = role.as_str(),
            "Role check failed"
        );
        Err(create_api_error(ApiResponse::forbidden(
            "FORBIDDEN_ROLE",
            "Insufficient role for this resource",
        )))
    }
}

/// Caller with the `admin` role
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthenticatedUser::from_request(req, payload);
        Box::pin(async move { require_role(auth.await?, UserRole::Admin).map(AdminUser) })
    }
}

/// Caller with the `student` role
#[derive(Debug, Clone)]
pub struct StudentUser(pub User);

impl FromRequest for StudentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthenticatedUser::from_request(req, payload);
        Box::pin(async move { require_role(auth.await?, UserRole::Student).map(StudentUser) })
    }
}
