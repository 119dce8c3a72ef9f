use std::sync::Arc;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::clients::nager::NagerClient;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::db::Store;
use crate::services::{CalculatorService, HolidayService, HolidaySource};

/// Build the HTTP client used for the holiday API. Requests carry no timeout.
fn build_http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))
}

/// Everything a request handler needs. Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub holidays: Arc<HolidayService>,

    pub calculator: Arc<CalculatorService>,

    pub start_time: Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: Config, prometheus_handle: Option<PrometheusHandle>) -> anyhow::Result<Self> {
        let client = NagerClient::new(build_http_client()?, config.holidays.base_url.clone());
        Ok(Self::with_source(config, Arc::new(client), prometheus_handle))
    }

    #[must_use]
    pub fn with_source(
        config: Config,
        source: Arc<dyn HolidaySource>,
        prometheus_handle: Option<PrometheusHandle>,
    ) -> Self {
        let store = Store::new(config.database.connection_url());
        let holidays = Arc::new(HolidayService::new(source, &config.holidays));
        let calculator = Arc::new(CalculatorService::new(
            store.clone(),
            config.database.strict_writes,
        ));

        Self {
            config: Arc::new(config),
            store,
            holidays,
            calculator,
            start_time: Instant::now(),
            prometheus_handle,
        }
    }
}
