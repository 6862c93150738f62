//! # Analytics Models
//!
//! Closed-form analytics for European options under Black-Scholes-Merton
//! assumptions.
//!
//! This crate provides:
//! - Option parameter definitions with validation (`instruments`)
//! - Standard normal distribution functions (`analytical::distributions`)
//! - Black-Scholes pricing and Greeks (`analytical::black_scholes`)
//! - First/second-order Taylor repricing from Greeks (`analytical::taylor`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Pure and stateless**: every operation is deterministic, side-effect
//!   free, and safe to call concurrently without coordination
//! - **Validate at the boundary**: domain errors are raised when parameters
//!   are constructed; the pricing hot path is total
//!
//! ## Usage Example
//!
//! ```rust
//! use analytics_models::instruments::{OptionParams, OptionType};
//! use analytics_models::analytical::BlackScholes;
//!
//! let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let model = BlackScholes::new(params);
//!
//! let price = model.price();
//! let greeks = model.greeks();
//! assert!(price > 0.0);
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
