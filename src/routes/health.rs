use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use crate::models::HealthResponse;
use super::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/ping", web::get().to(ping))
        .route("/health", web::get().to(health_check));
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Backend API is running!" }))
}

async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Health check endpoint, reports `degraded` when the store is unreachable
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = match state.store.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
