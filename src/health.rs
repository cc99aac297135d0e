use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::dashboard::application::domain::overview::CollectionCounts;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
    records: CollectionCounts,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reads every collection once
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let overview = data.dashboard.admin_overview().await;

    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        store: "in-memory",
        records: overview.counts,
    })
}
