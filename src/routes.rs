use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const ABOUT: &str = "/about";
pub const STATUS: &str = "/status";
pub const HEALTH: &str = "/health";
pub const VIEW: &str = "/view";
pub const PATIENT: &str = "/patient/{patient_id}";
pub const SORT: &str = "/sort";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Full application router with request tracing and API docs
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ROOT, get(handlers::root_handler))
        .route(ABOUT, get(handlers::about_handler))
        .route(STATUS, get(handlers::status_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(VIEW, get(handlers::view_handler))
        .route(PATIENT, get(handlers::patient_handler))
        .route(SORT, get(handlers::sort_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
