//! Option pricing endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use analytics_models::analytical::BlackScholes;

use super::{bad_request, AppState, OptionRequest};

/// Pricing response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Theoretical fair value
    pub price: f64,
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/price", post(price_handler))
}

/// POST /api/v1/price - Theoretical fair value for one option
async fn price_handler(Json(request): Json<OptionRequest>) -> impl IntoResponse {
    match request.to_params() {
        Ok(params) => {
            let model = BlackScholes::new(params);
            (StatusCode::OK, Json(PriceResponse { price: model.price() })).into_response()
        }
        Err(err) => bad_request(err).into_response(),
    }
}
