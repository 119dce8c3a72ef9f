use serde::{Deserialize, Serialize};

use crate::constants::formats;
use crate::db::SearchRecord;
use crate::services::Calculation;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalculateRequest {
    /// String or null. Any other JSON type rejects the whole body.
    pub holiday_name: Option<String>,
    pub holiday_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub days_until: i32,
    pub holiday_name: Option<String>,
    pub holiday_date: String,
}

impl From<Calculation> for CalculateResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            success: true,
            days_until: calc.days_until,
            holiday_name: calc.holiday_name,
            holiday_date: calc.holiday_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchHistoryDto {
    pub id: i32,
    pub holiday_name: Option<String>,
    pub holiday_date: String,
    pub days_until: i32,
    pub searched_at: String,
}

impl From<SearchRecord> for SearchHistoryDto {
    fn from(record: SearchRecord) -> Self {
        Self {
            id: record.id,
            holiday_name: record.holiday_name,
            holiday_date: record.holiday_date.format(formats::HOLIDAY_DATE).to_string(),
            days_until: record.days_until,
            searched_at: record.searched_at.format(formats::SEARCHED_AT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime: u64,
}
