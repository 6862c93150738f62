//! Closed-form analytics for European options.
//!
//! This module provides:
//! - Standard normal CDF/PDF (`distributions`)
//! - Black-Scholes pricing and analytical Greeks (`black_scholes`)
//! - First/second-order Taylor repricing (`taylor`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Shared intermediates**: price and Greeks are derived from the same
//!   clamped d1/d2 terms so results are internally consistent
//! - **Epsilon-floor policy**: expiry and volatility are floored at 1e-10
//!   before any division or logarithm, so degenerate inputs stay finite

pub mod black_scholes;
pub mod distributions;
pub mod taylor;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks, EPSILON_FLOOR};
pub use distributions::{norm_cdf, norm_pdf};
pub use taylor::{taylor_reprice, MarketShift};
