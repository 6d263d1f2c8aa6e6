mod api;

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use rcbode_core::RcCircuit;

use crate::api::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let circuit = RcCircuit::default();
    info!(
        "circuit: R={} Ω, C={} F, Vin={} V, cutoff={:.1} Hz",
        circuit.resistance(),
        circuit.capacitance(),
        circuit.vin(),
        circuit.cutoff_frequency()
    );

    let state = Arc::new(AppState { circuit });

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/rc-gain", post(api::rc_gain))
        .route("/api/sweep", post(api::sweep))
        .with_state(state);

    let addr: SocketAddr = env::var("RCBODE_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .context("parsing RCBODE_ADDR")?;
    info!("rcbode server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("shutdown...");
        })
        .await?;

    Ok(())
}
