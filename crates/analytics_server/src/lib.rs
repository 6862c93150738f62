//! REST API server for the options analytics library.
//!
//! Exposes option pricing, Greeks calculation, and Taylor repricing over
//! HTTP for dashboard-style consumers. All handlers are stateless wrappers
//! around the pure functions in `analytics_models`.

pub mod config;
pub mod routes;
pub mod server;

// Re-export the analytics crate for integration
pub use analytics_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
