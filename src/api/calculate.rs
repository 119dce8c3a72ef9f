use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use crate::api::{ApiError, AppState, CalculateRequest, CalculateResponse};

/// `POST /api/calculate`
///
/// Computes the days left until `holiday_date` and logs the lookup. A body
/// that fails to decode is reported like any other failure.
pub async fn calculate_days(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload?;

    let calculation = state
        .calculator
        .calculate(request.holiday_name, request.holiday_date)
        .await?;

    Ok(Json(calculation.into()))
}
