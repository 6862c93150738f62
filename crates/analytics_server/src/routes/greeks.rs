//! Greeks calculation endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};

use analytics_models::analytical::BlackScholes;

use super::{bad_request, AppState, OptionRequest};

/// Build the greeks routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/greeks", post(greeks_handler))
}

/// POST /api/v1/greeks - All five sensitivities for one option
///
/// The response body is the `Greeks` record itself: delta, gamma, vega
/// (per vol point), theta (per calendar day), rho (per rate point), all
/// computed from the same clamped inputs as the price endpoint.
async fn greeks_handler(Json(request): Json<OptionRequest>) -> impl IntoResponse {
    match request.to_params() {
        Ok(params) => {
            let model = BlackScholes::new(params);
            (StatusCode::OK, Json(model.greeks())).into_response()
        }
        Err(err) => bad_request(err).into_response(),
    }
}
