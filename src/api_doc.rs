use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{MessageResponse, PatientResponse, SortResponse, ViewResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "patient-query-api",
        version = "0.1.0",
        description = "Read-only patient records served from a flat JSON file"
    ),
    paths(
        handlers::info::root_handler,
        handlers::info::about_handler,
        handlers::info::status_handler,
        handlers::health::health_handler,
        handlers::view::view_handler,
        handlers::patient::patient_handler,
        handlers::sort::sort_handler
    ),
    components(
        schemas(
            MessageResponse,
            ViewResponse,
            PatientResponse,
            SortResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "info", description = "Informational endpoints"),
        (name = "health", description = "Health check operations"),
        (name = "patients", description = "Patient record queries")
    )
)]
pub struct ApiDoc;
