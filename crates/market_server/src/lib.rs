//! REST API server for the marketdesk sample market data and pricing tools.
//!
//! This crate exposes the bundled IPO/market tables and the numeric tools
//! (Black-Scholes pricing, valuation and prediction heuristics) over HTTP.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export the data and pricing crates for integration
pub use market_core;
pub use market_pricing;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
