//! Route modules for the analytics server.
//!
//! This module contains endpoint group-specific routers:
//! - pricing: theoretical fair value
//! - greeks: risk sensitivities
//! - reprice: Taylor what-if repricing
//! - health: health check and readiness endpoints

pub mod greeks;
pub mod health;
pub mod pricing;
pub mod reprice;

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use analytics_models::instruments::{InstrumentError, OptionParams, OptionType};

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Option parameters as they arrive on the wire.
///
/// Validation happens in [`OptionRequest::to_params`]; an out-of-domain
/// option type never gets this far because serde rejects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRequest {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionRequest {
    /// Validate into library parameters.
    pub fn to_params(self) -> Result<OptionParams<f64>, InstrumentError> {
        OptionParams::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            self.option_type,
        )
    }
}

/// Error payload for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Map a domain validation failure to a 400 response.
pub(crate) fn bad_request(err: InstrumentError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(error = %err, "rejected request parameters");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid_parameters".to_string(),
            message: err.to_string(),
        }),
    )
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .merge(greeks::routes())
        .merge(reprice::routes())
        .with_state(state)
}
