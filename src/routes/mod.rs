// Route exports
pub mod candidates;
pub mod employees;
pub mod health;
pub mod planning;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use std::sync::Arc;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{HrStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HrStore>,
    pub matcher: Matcher,
}

/// Routes are mounted at the root so existing onboarding clients keep working
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(candidates::configure)
        .configure(planning::configure)
        .configure(employees::configure);
}

/// An [`ErrorResponse`] returned through actix's error path
#[derive(Debug)]
pub struct ApiError(pub ErrorResponse);

impl ApiError {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            status_code: status.as_u16(),
        })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::new(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle path parameter errors, e.g. a non-numeric todo id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::new(StatusCode::NOT_FOUND, "invalid_path", format!("Invalid path: {}", err)).into()
}

/// Payload extractor settings shared by the server and tests
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    ApiError::new(status, error, message).error_response()
}

/// 400 for a request missing required fields
pub(crate) fn bad_request(error: &str, errors: &validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: {}", errors);
    error_response(StatusCode::BAD_REQUEST, error, errors.to_string())
}

/// 500 for a storage failure, logged with the operation that hit it
pub(crate) fn storage_error(operation: &str, err: StoreError) -> HttpResponse {
    tracing::error!("{} failed: {}", operation, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error", err.to_string())
}
