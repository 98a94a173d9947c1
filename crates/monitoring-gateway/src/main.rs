//! Monitoring gateway
//!
//! - Management API: GET/POST /devices, PUT /devices/:id
//! - Metrics scrape: GET /metrics (separate listener)

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use monitoring_core::error::{MonitoringError, Result};
use monitoring_gateway::{app_state, config, router};

const CONFIG_PATH: &str = "monitoring.yaml";

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "monitoring-gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(CONFIG_PATH)?;
    let api_addr = cfg.server.api_addr()?;
    let metrics_addr = cfg.server.metrics_addr()?;

    tracing::info!(
        version = %cfg.app.version,
        seeds = cfg.seed_devices.len(),
        "monitoring-gateway starting"
    );

    let state = app_state::AppState::new(cfg)?;
    let api = router::build_api_router(state.clone());
    let metrics = router::build_metrics_router(state);

    tokio::try_join!(
        serve("api", api_addr, api),
        serve("metrics", metrics_addr, metrics),
    )?;
    Ok(())
}

async fn serve(name: &'static str, addr: SocketAddr, app: axum::Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| MonitoringError::Internal(format!("{name} listener bind {addr} failed: {e}")))?;
    tracing::info!(listener = name, %addr, "listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| MonitoringError::Internal(format!("{name} listener failed: {e}")))
}
