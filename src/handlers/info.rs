use crate::models::MessageResponse;
use crate::routes;
use axum::Json;

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

/// GET / handler
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tag = "info"
)]
pub async fn root_handler() -> Json<MessageResponse> {
    message("Hello World")
}

/// GET /about handler
#[utoipa::path(
    get,
    path = routes::ABOUT,
    responses((status = 200, description = "About the service", body = MessageResponse)),
    tag = "info"
)]
pub async fn about_handler() -> Json<MessageResponse> {
    message("This is the about page")
}

/// GET /status handler - liveness only, does not touch the patients file
#[utoipa::path(
    get,
    path = routes::STATUS,
    responses((status = 200, description = "Service is running", body = MessageResponse)),
    tag = "info"
)]
pub async fn status_handler() -> Json<MessageResponse> {
    message("Patient Query Service is running")
}
