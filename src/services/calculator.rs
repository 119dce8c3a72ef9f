//! Countdown calculation plus the search-log write that accompanies it.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{Store, StoreError};
use crate::services::countdown::{self, DateParseError};

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("holiday_date is required")]
    MissingDate,

    #[error(transparent)]
    InvalidDate(#[from] DateParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub holiday_name: Option<String>,
    /// The date exactly as the caller sent it.
    pub holiday_date: String,
    pub days_until: i32,
    /// Id of the search log row, `None` when the write was skipped.
    pub record_id: Option<i32>,
}

pub struct CalculatorService {
    store: Store,
    strict_writes: bool,
}

impl CalculatorService {
    #[must_use]
    pub const fn new(store: Store, strict_writes: bool) -> Self {
        Self {
            store,
            strict_writes,
        }
    }

    pub async fn calculate(
        &self,
        holiday_name: Option<String>,
        holiday_date: Option<String>,
    ) -> Result<Calculation, CalculationError> {
        self.calculate_on(countdown::local_today(), holiday_name, holiday_date)
            .await
    }

    /// Same as [`Self::calculate`] with an explicit "today".
    pub async fn calculate_on(
        &self,
        today: NaiveDate,
        holiday_name: Option<String>,
        holiday_date: Option<String>,
    ) -> Result<Calculation, CalculationError> {
        let holiday_date = holiday_date.ok_or(CalculationError::MissingDate)?;
        let date = countdown::parse_holiday_date(&holiday_date)?;
        let days_until = countdown::days_until(date, today);

        let record_id = match self
            .store
            .record_search(holiday_name.as_deref(), date, days_until)
            .await
        {
            Ok(id) => Some(id),
            Err(e) if e.is_connection_failure() && !self.strict_writes => {
                warn!(error = %e, "Search log unavailable, skipping write");
                None
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            holiday = holiday_name.as_deref().unwrap_or(""),
            date = %date,
            days_until,
            recorded = record_id.is_some(),
            "Calculated holiday countdown"
        );

        Ok(Calculation {
            holiday_name,
            holiday_date,
            days_until,
            record_id,
        })
    }
}
