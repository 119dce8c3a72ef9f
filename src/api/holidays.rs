use axum::{Json, extract::State};
use std::sync::Arc;

use crate::api::{ApiError, AppState};

/// `GET /api/holidays`: the upstream holiday list, forwarded unchanged.
pub async fn list_holidays(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let holidays = state.holidays.list().await?;
    Ok(Json(holidays))
}
