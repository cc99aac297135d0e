use actix_web::{delete, get, patch, web, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::contact::application::domain::entities::{
    ContactMessageFilter, ContactMessagePatch,
};
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

fn message_not_found() -> HttpResponse {
    ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
}

#[get("/api/admin/messages")]
pub async fn get_messages_handler(
    _admin: AdminUser,
    query: web::Query<ContactMessageFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.messages.list(&query.into_inner()).await)
}

#[patch("/api/admin/messages/{message_id}")]
pub async fn patch_message_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ContactMessagePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.messages.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => message_not_found(),
    }
}

#[delete("/api/admin/messages/{message_id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.delete(&RecordId::from(path.into_inner())).await {
        Ok(()) => ApiResponse::no_content(),
        Err(CrudError::NotFound { .. }) => message_not_found(),
    }
}
