pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use state::AppState;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let json = config.general.log_format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

fn init_metrics(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

/// Builds the shared state and makes sure the search log table exists.
///
/// The calculator tolerates a missing store, so a failed bootstrap is logged
/// and not fatal.
pub async fn build_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<AppState> {
    let state = AppState::new(config, prometheus_handle)?;

    if let Err(e) = state.store.ensure_schema().await {
        warn!(error = %e, "Could not prepare search log table");
    }

    Ok(state)
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&config);
    config.log_sources();

    if let Some(Commands::Init) = cli.command {
        if Config::create_default_if_missing()? {
            println!("✓ Config file created. Edit config.toml and run again.");
        } else {
            println!("config.toml already exists, leaving it untouched.");
        }
        return Ok(());
    }

    config.validate()?;

    match cli.command {
        None | Some(Commands::Serve) => {
            let prometheus_handle = init_metrics(&config)?;
            let state = build_state(config, prometheus_handle).await?;
            run_server(state).await
        }

        Some(Commands::Holidays) => cli::cmd_holidays(&AppState::new(config, None)?).await,

        Some(Commands::Countdown { name, date }) => {
            cli::cmd_countdown(&build_state(config, None).await?, &name, &date).await
        }

        Some(Commands::History { limit }) => {
            cli::cmd_history(&build_state(config, None).await?, limit).await
        }

        Some(Commands::Init) => Ok(()),
    }
}

async fn run_server(state: AppState) -> anyhow::Result<()> {
    info!("holidayd v{} starting...", env!("CARGO_PKG_VERSION"));

    if state.config.security.secret_key.is_none() {
        warn!("SECRET_KEY is not set");
    }

    let addr: SocketAddr = format!("{}:{}", state.config.server.host, state.config.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let app = api::router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
