use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::clients::nager::HolidaySourceError;
use crate::db::StoreError;
use crate::services::CalculationError;

/// Every variant renders as `500 {"error": "..."}`; the variants only decide
/// what gets logged.
#[derive(Debug)]
pub enum ApiError {
    ExternalApiError { service: String, message: String },

    DatabaseUnavailable,

    DatabaseError(String),

    InvalidRequest(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ExternalApiError { message, .. } => write!(f, "{}", message),
            ApiError::DatabaseUnavailable => write!(f, "Database connection failed"),
            ApiError::DatabaseError(msg)
            | ApiError::InvalidRequest(msg)
            | ApiError::InternalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::ExternalApiError { service, message } => {
                tracing::warn!("{} API error: {}", service, message);
            }
            ApiError::DatabaseUnavailable => tracing::error!("Database connection failed"),
            ApiError::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            ApiError::InvalidRequest(msg) => tracing::debug!("Rejected request: {}", msg),
            ApiError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connect(_) => ApiError::DatabaseUnavailable,
            StoreError::Query(e) => ApiError::DatabaseError(e.to_string()),
        }
    }
}

impl From<HolidaySourceError> for ApiError {
    fn from(err: HolidaySourceError) -> Self {
        ApiError::ExternalApiError {
            service: "Nager.Date".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<CalculationError> for ApiError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::Store(e) => e.into(),
            other => ApiError::InvalidRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_every_error_is_a_500_with_message() {
        let (status, body) = render(ApiError::InvalidRequest("bad date".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "bad date" }));

        let (status, body) = render(ApiError::DatabaseUnavailable).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database connection failed");
    }

    #[tokio::test]
    async fn test_external_error_keeps_underlying_message() {
        let err = ApiError::from(HolidaySourceError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.test/x".to_string(),
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "404 Not Found error for url: https://example.test/x");
    }

    #[test]
    fn test_connection_failure_maps_to_unavailable() {
        let err = ApiError::from(StoreError::Connect(sea_orm::DbErr::Custom(
            "refused".to_string(),
        )));
        assert!(matches!(err, ApiError::DatabaseUnavailable));

        let err = ApiError::from(StoreError::Query(sea_orm::DbErr::Custom(
            "no such table".to_string(),
        )));
        assert_eq!(err.to_string(), "Custom Error: no such table");
    }
}
