//! Error types for option parameter validation.

use thiserror::Error;

/// Option parameter validation errors.
///
/// Each variant captures the offending value so callers can report the
/// rejected input without re-deriving it.
///
/// # Examples
/// ```
/// use analytics_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidSpot { spot: -1.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (must be strictly positive; ln(S/K) is undefined otherwise).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (must be strictly positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry (must be non-negative).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (must be non-negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}
