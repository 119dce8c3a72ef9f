use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::{debug, info};

pub mod repositories;

pub use crate::entities::holiday_searches::Model as SearchRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connect(#[source] DbErr),

    #[error("{0}")]
    Query(#[from] DbErr),
}

impl StoreError {
    #[must_use]
    pub const fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Connect(_))
    }
}

/// Handle to the search log. Every operation opens its own connection and
/// closes it before returning; nothing is pooled between requests.
#[derive(Clone)]
pub struct Store {
    url: String,
}

impl Store {
    #[must_use]
    pub fn new(db_url: impl Into<String>) -> Self {
        Self { url: db_url.into() }
    }

    async fn connect(&self) -> Result<DatabaseConnection, StoreError> {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(1)
            .min_connections(0)
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(StoreError::Connect)
    }

    async fn close(conn: DatabaseConnection) {
        if let Err(e) = conn.close().await {
            debug!(error = %e, "Failed to close database connection");
        }
    }

    fn searches_repo(conn: &DatabaseConnection) -> repositories::searches::SearchRepository {
        repositories::searches::SearchRepository::new(conn.clone())
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.connect().await?;
        let result = Self::searches_repo(&conn).create_table().await;
        Self::close(conn).await;
        result?;

        info!("Database schema ready");
        Ok(())
    }

    pub async fn record_search(
        &self,
        holiday_name: Option<&str>,
        holiday_date: NaiveDate,
        days_until: i32,
    ) -> Result<i32, StoreError> {
        let conn = self.connect().await?;
        let result = Self::searches_repo(&conn)
            .add(holiday_name, holiday_date, days_until)
            .await;
        Self::close(conn).await;
        Ok(result?)
    }

    pub async fn recent_searches(&self, limit: u64) -> Result<Vec<SearchRecord>, StoreError> {
        let conn = self.connect().await?;
        let result = Self::searches_repo(&conn).recent(limit).await;
        Self::close(conn).await;
        Ok(result?)
    }
}
