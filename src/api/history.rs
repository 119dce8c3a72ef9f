use axum::{Json, extract::State};
use std::sync::Arc;

use crate::api::{ApiError, AppState, SearchHistoryDto};
use crate::constants::limits::HISTORY_LIMIT;

/// `GET /api/history`: the latest calculations, newest first.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchHistoryDto>>, ApiError> {
    let records = state.store.recent_searches(HISTORY_LIMIT).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
