use crate::error::{ApiError, ErrorResponse};
use crate::models::ViewResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /view handler - Return every patient, keyed by id in file order
#[utoipa::path(
    get,
    path = routes::VIEW,
    responses(
        (status = 200, description = "All patient records", body = ViewResponse),
        (status = 500, description = "Patients file could not be loaded", body = ErrorResponse)
    ),
    tag = "patients"
)]
pub async fn view_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ViewResponse>), ApiError> {
    let data = state.store.list_all().await?;

    if data.is_empty() {
        tracing::info!("Patients file contains no records");
    } else {
        tracing::info!("Listed {} patients", data.len());
    }

    Ok((StatusCode::OK, Json(ViewResponse { data })))
}
