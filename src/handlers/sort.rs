use crate::error::{ApiError, ErrorResponse};
use crate::models::{SortField, SortOrder, SortQuery, SortResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// Validate the raw query values; the field is checked before the order
pub fn parse_sort_params(
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<(SortField, SortOrder), ApiError> {
    let sort_by = sort_by.ok_or_else(|| {
        ApiError::InvalidQueryParam("sort_by is required, one of: height, weight, bmi".to_string())
    })?;

    let field = SortField::parse(sort_by).ok_or_else(|| {
        ApiError::InvalidQueryParam(format!(
            "sort_by must be one of: height, weight, bmi, got '{}'",
            sort_by
        ))
    })?;

    let order = match order {
        None => SortOrder::default(),
        Some(order_str) => SortOrder::parse(order_str).ok_or_else(|| {
            ApiError::InvalidQueryParam(format!(
                "order must be one of: asc, desc, got '{}'",
                order_str
            ))
        })?,
    };

    Ok((field, order))
}

/// GET /sort handler - List patients ordered by a numeric attribute
///
/// Query parameters:
/// - sort_by: height, weight or bmi (required)
/// - order: asc or desc (optional, default: asc)
///
/// Records missing the attribute, or holding a non-numeric value, sort as 0.
#[utoipa::path(
    get,
    path = routes::SORT,
    params(
        ("sort_by" = String, Query, description = "Attribute to sort by: height, weight, bmi"),
        ("order" = Option<String>, Query, description = "Sort direction: asc (default) or desc")
    ),
    responses(
        (status = 200, description = "Patients in sorted order", body = SortResponse),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Patients file could not be loaded", body = ErrorResponse)
    ),
    tag = "patients"
)]
pub async fn sort_handler(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<(StatusCode, Json<SortResponse>), ApiError> {
    let (field, order) = parse_sort_params(query.sort_by.as_deref(), query.order.as_deref())?;

    let sorted_data = state.store.sort_by(field, order).await?;

    tracing::info!(
        "Sorted {} patients (sort_by: {}, order: {:?})",
        sorted_data.len(),
        field.as_str(),
        order
    );

    Ok((StatusCode::OK, Json(SortResponse { sorted_data })))
}
