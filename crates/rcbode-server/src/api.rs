//! API root: request/response models and handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, Json};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use rcbode_core::{FilterType, RcCircuit};

/// Shared application state: the fixed circuit configuration
pub struct AppState {
    pub circuit: RcCircuit,
}

// --------- response models ---------

#[derive(Serialize)]
pub struct HealthMsg {
    pub status: &'static str,
    pub message: &'static str,
}

/// Single-frequency evaluation request
#[derive(Deserialize)]
pub struct GainRequest {
    pub frequency: f64,
    pub filter_type: String,
}

/// Single-frequency evaluation response
///
/// Non-finite gain (0 Hz high-pass) serializes as JSON null.
#[derive(Serialize)]
pub struct GainResponse {
    pub frequency: f64,
    pub magnitude: f64,
    pub gain_db: f64,
    pub vout: f64,
    pub filter_type: &'static str,
}

/// Sweep request; `frequency` is part of the historical request shape
/// and is accepted but unused.
#[derive(Deserialize)]
pub struct SweepRequest {
    pub filter_type: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub frequency: Option<f64>,
}

/// Bode sweep response: positionally aligned frequency/gain arrays
#[derive(Serialize)]
pub struct SweepResponse {
    pub frequencies: Vec<f64>,
    pub gains_db: Vec<f64>,
    pub filter_type: &'static str,
}

fn invalid_filter_type(err: impl std::fmt::Display) -> Response {
    warn!("rejected request: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

/// Build the evaluation response body for a parsed filter type
pub fn gain_body(circuit: &RcCircuit, frequency: f64, filter_type: FilterType) -> GainResponse {
    let r = circuit.response(frequency, filter_type);
    GainResponse {
        frequency: r.frequency,
        magnitude: r.magnitude,
        gain_db: r.gain_db,
        vout: r.vout,
        filter_type: filter_type.as_str(),
    }
}

/// Build the sweep response body for a parsed filter type
pub fn sweep_body(circuit: &RcCircuit, filter_type: FilterType) -> SweepResponse {
    let sweep = circuit.sweep(filter_type);
    SweepResponse {
        frequencies: sweep.frequencies,
        gains_db: sweep.gains_db,
        filter_type: filter_type.as_str(),
    }
}

pub async fn health() -> Json<HealthMsg> {
    Json(HealthMsg {
        status: "ok",
        message: "backend is running",
    })
}

/// POST /api/rc-gain — evaluate gain at a single frequency
pub async fn rc_gain(State(app): State<Arc<AppState>>, Json(req): Json<GainRequest>) -> Response {
    let filter_type: FilterType = match req.filter_type.parse() {
        Ok(ft) => ft,
        Err(e) => return invalid_filter_type(e),
    };

    info!(
        "rc-gain: frequency={} filter_type={}",
        req.frequency, filter_type
    );
    Json(gain_body(&app.circuit, req.frequency, filter_type)).into_response()
}

/// POST /api/sweep — generate Bode gain sweep data for plotting
pub async fn sweep(State(app): State<Arc<AppState>>, Json(req): Json<SweepRequest>) -> Response {
    let filter_type: FilterType = match req.filter_type.parse() {
        Ok(ft) => ft,
        Err(e) => return invalid_filter_type(e),
    };

    let body = sweep_body(&app.circuit, filter_type);
    info!(
        "sweep: filter_type={} points={}",
        filter_type,
        body.frequencies.len()
    );
    Json(body).into_response()
}
