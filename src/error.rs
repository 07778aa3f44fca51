use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Client mistakes map to 4xx, anything that goes wrong while reading the
/// backing file maps to 500. Every variant renders as an `ErrorResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// No record under the requested identifier
    PatientNotFound(String),
    /// Invalid or missing query parameter
    InvalidQueryParam(String),
    /// Backing file missing, unreadable or malformed
    StoreError(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PatientNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::PatientNotFound(id) => write!(f, "Patient not found: {}", id),
            ApiError::InvalidQueryParam(msg) => write!(f, "Invalid query parameter: {}", msg),
            // {:#} includes the context chain
            ApiError::StoreError(err) => write!(f, "Patient store error: {:#}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::info!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::PatientNotFound("P404".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidQueryParam("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::StoreError(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_carries_message() {
        let response = ApiError::PatientNotFound("P042".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Patient not found: P042");
    }

    #[test]
    fn test_store_error_includes_context() {
        let err = anyhow::anyhow!("No such file").context("Failed to read patients file");
        let api_error: ApiError = err.into();
        let message = api_error.to_string();
        assert!(message.contains("Failed to read patients file"));
        assert!(message.contains("No such file"));
    }
}
