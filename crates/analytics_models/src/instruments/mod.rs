//! Option contract definitions.
//!
//! This module provides the validated parameter set a single analytics
//! request operates on:
//! - `OptionType`: call/put payoff direction
//! - `OptionParams`: spot, strike, expiry, rate, volatility, type
//! - `InstrumentError`: validation failures

pub mod error;
pub mod option_type;
pub mod params;

// Re-export main types at module level
pub use error::InstrumentError;
pub use option_type::OptionType;
pub use params::OptionParams;
