use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::services::holidays::HolidaySource;

pub const NAGER_API: &str = "https://date.nager.at/api/v3";

#[derive(Debug, Error)]
pub enum HolidaySourceError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("{status} error for url: {url}")]
    Status { status: StatusCode, url: String },
}

/// Typed view of one Nager.Date entry. The HTTP proxy never uses this; it
/// forwards the upstream JSON untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: NaiveDate,
    pub local_name: Option<String>,
    pub name: String,
    pub country_code: Option<String>,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Clone)]
pub struct NagerClient {
    client: Client,
    base_url: String,
}

impl NagerClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn holidays_url(&self, year: i32, country_code: &str) -> String {
        format!("{}/publicholidays/{}/{}", self.base_url, year, country_code)
    }

    pub async fn get_public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<serde_json::Value, HolidaySourceError> {
        let url = self.holidays_url(year, country_code);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidaySourceError::Status { status, url });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<serde_json::Value, HolidaySourceError> {
        self.get_public_holidays(year, country_code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holidays_url() {
        let client = NagerClient::new(Client::new(), "http://localhost:9000/api/v3/");
        assert_eq!(
            client.holidays_url(2025, "US"),
            "http://localhost:9000/api/v3/publicholidays/2025/US"
        );
    }

    #[test]
    fn test_parse_public_holiday() {
        let json = r#"{
            "date": "2025-07-04",
            "localName": "Independence Day",
            "name": "Independence Day",
            "countryCode": "US",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        }"#;

        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(holiday.name, "Independence Day");
        assert!(holiday.global);
        assert_eq!(holiday.types, vec!["Public".to_string()]);
    }
}
