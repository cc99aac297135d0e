use actix_web::{get, web, Responder};

use crate::modules::testimonial::application::domain::entities::TestimonialFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/testimonials")]
pub async fn get_testimonials_handler(
    query: web::Query<TestimonialFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.testimonials.list(&query.into_inner()).await)
}
