use actix_web::{delete, patch, post, web, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::testimonial::application::domain::entities::{
    TestimonialDraft, TestimonialPatch,
};
use crate::shared::api::ApiResponse;
use crate::shared::store::{CrudError, RecordId};
use crate::AppState;

fn testimonial_not_found() -> HttpResponse {
    ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
}

#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    _admin: AdminUser,
    req: web::Json<TestimonialDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::created(data.testimonials.create(req.into_inner()).await)
}

#[patch("/api/admin/testimonials/{testimonial_id}")]
pub async fn patch_testimonial_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<TestimonialPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RecordId::from(path.into_inner());

    match data.testimonials.update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(CrudError::NotFound { .. }) => testimonial_not_found(),
    }
}

#[delete("/api/admin/testimonials/{testimonial_id}")]
pub async fn delete_testimonial_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonials.delete(&RecordId::from(path.into_inner())).await {
        Ok(()) => ApiResponse::no_content(),
        Err(CrudError::NotFound { .. }) => testimonial_not_found(),
    }
}
