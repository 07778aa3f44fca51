use crate::error::{ApiError, ErrorResponse};
use crate::models::PatientResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /patient/{patient_id} handler - Retrieve one patient record
#[utoipa::path(
    get,
    path = routes::PATIENT,
    params(
        ("patient_id" = String, Path, description = "Patient identifier, e.g. P001")
    ),
    responses(
        (status = 200, description = "Patient found", body = PatientResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 500, description = "Patients file could not be loaded", body = ErrorResponse)
    ),
    tag = "patients"
)]
pub async fn patient_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<(StatusCode, Json<PatientResponse>), ApiError> {
    match state.store.read(&patient_id).await? {
        Some(patient) => {
            tracing::info!("Retrieved patient with id: {}", patient_id);
            Ok((StatusCode::OK, Json(PatientResponse { patient })))
        }
        None => Err(ApiError::PatientNotFound(patient_id)),
    }
}
