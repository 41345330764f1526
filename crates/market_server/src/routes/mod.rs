//! Route modules for the marketdesk server
//!
//! This module contains endpoint group-specific routers:
//! - health: Greeting, health check and readiness endpoints
//! - market: IPO listings and market snapshot endpoints
//! - tools: Black-Scholes pricing, valuation and prediction endpoints

pub mod health;
pub mod market;
pub mod tools;

use axum::Router;
use std::sync::Arc;

use market_core::{sample_indices, sample_ipos, sample_stocks, IpoListing, MarketSnapshot};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// IPO listings served by the API
    pub listings: Arc<Vec<IpoListing>>,
    /// Index and stock snapshot served by the API
    pub snapshot: Arc<MarketSnapshot>,
}

impl AppState {
    /// Create a new AppState backed by the bundled sample tables
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
            listings: Arc::new(sample_ipos()),
            snapshot: Arc::new(MarketSnapshot {
                indices: sample_indices(),
                stocks: sample_stocks(),
            }),
        }
    }
}

/// Build the main application router by merging all route modules
///
/// CORS is wide open: the API serves read-only sample data and pure
/// computations to browser frontends on arbitrary origins.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(market::routes())
        .merge(tools::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
