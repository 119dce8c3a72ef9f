use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod assets;
mod calculate;
mod error;
mod history;
mod holidays;
mod observability;
mod system;
mod types;

pub use error::ApiError;
pub use types::*;

pub use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let api_router = Router::new()
        .route("/holidays", get(holidays::list_holidays))
        .route("/calculate", post(calculate::calculate_days))
        .route("/history", get(history::get_history))
        .route("/health", get(system::health));

    Router::new()
        .nest("/api", api_router)
        .route("/metrics", get(system::get_metrics))
        .fallback(assets::serve_asset)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_requests))
}
