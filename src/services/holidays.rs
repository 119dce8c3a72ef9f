use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::clients::nager::HolidaySourceError;
use crate::config::HolidayApiConfig;

/// Read-only source of public holidays for a country and year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Returns the upstream payload as-is.
    async fn public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<serde_json::Value, HolidaySourceError>;
}

pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    year: i32,
    country_code: String,
}

impl HolidayService {
    #[must_use]
    pub fn new(source: Arc<dyn HolidaySource>, config: &HolidayApiConfig) -> Self {
        Self {
            source,
            year: config.year,
            country_code: config.country_code.clone(),
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub async fn list(&self) -> Result<serde_json::Value, HolidaySourceError> {
        debug!(year = self.year, country = %self.country_code, "Fetching public holidays");

        self.source
            .public_holidays(self.year, &self.country_code)
            .await
            .inspect_err(|e| warn!(error = %e, "Holiday API request failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    struct RecordingSource {
        calls: Mutex<Vec<(i32, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl HolidaySource for RecordingSource {
        async fn public_holidays(
            &self,
            year: i32,
            country_code: &str,
        ) -> Result<serde_json::Value, HolidaySourceError> {
            self.calls
                .lock()
                .unwrap()
                .push((year, country_code.to_string()));

            if self.fail {
                return Err(HolidaySourceError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    url: "http://upstream".to_string(),
                });
            }

            Ok(serde_json::json!([{ "date": "2025-12-25", "name": "Christmas Day", "extra": 1 }]))
        }
    }

    fn service(fail: bool) -> (Arc<RecordingSource>, HolidayService) {
        let source = Arc::new(RecordingSource {
            calls: Mutex::new(Vec::new()),
            fail,
        });
        let config = HolidayApiConfig {
            country_code: "GB".to_string(),
            year: 2026,
            ..HolidayApiConfig::default()
        };
        (source.clone(), HolidayService::new(source, &config))
    }

    #[tokio::test]
    async fn test_list_uses_configured_year_and_country() {
        let (source, service) = service(false);
        service.list().await.unwrap();
        assert_eq!(
            source.calls.lock().unwrap().as_slice(),
            &[(2026, "GB".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_passes_payload_through() {
        let (_, service) = service(false);
        let payload = service.list().await.unwrap();
        assert_eq!(payload[0]["extra"], 1);
        assert_eq!(payload[0]["name"], "Christmas Day");
    }

    #[tokio::test]
    async fn test_list_surfaces_upstream_error() {
        let (_, service) = service(true);
        let err = service.list().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "503 Service Unavailable error for url: http://upstream"
        );
    }
}
