//! Taylor what-if repricing endpoint.
//!
//! Dashboards hit this on every slider tick, passing back the Greeks they
//! already hold instead of asking for a full reprice each time.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use analytics_models::analytical::{taylor_reprice, Greeks, MarketShift};

use super::AppState;

/// Repricing request: a base price, its Greeks, and the shifts to apply.
///
/// Shift units follow the Greeks' conventions: `daysShift` in calendar days,
/// `volShift` and `rateShift` in percentage points. Omitted shifts default
/// to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepriceRequest {
    /// Price the Greeks were computed at
    pub base_price: f64,
    /// Greeks from a previous /api/v1/greeks call
    pub greeks: Greeks<f64>,
    /// Absolute spot change
    #[serde(default)]
    pub spot_shift: f64,
    /// Elapsed calendar days
    #[serde(default)]
    pub days_shift: f64,
    /// Volatility change in percentage points
    #[serde(default)]
    pub vol_shift: f64,
    /// Rate change in percentage points
    #[serde(default)]
    pub rate_shift: f64,
}

/// Repricing response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepriceResponse {
    /// Estimated price after the shift
    pub price: f64,
}

/// Build the reprice routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/reprice", post(reprice_handler))
}

/// POST /api/v1/reprice - Local Taylor approximation of the shifted price
async fn reprice_handler(Json(request): Json<RepriceRequest>) -> impl IntoResponse {
    let shift = MarketShift::new(
        request.spot_shift,
        request.days_shift,
        request.vol_shift,
        request.rate_shift,
    );

    let price = taylor_reprice(request.base_price, &request.greeks, &shift);

    (StatusCode::OK, Json(RepriceResponse { price }))
}
