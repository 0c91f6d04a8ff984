//! Axum HTTP API server.
//!
//! This crate exposes the creative decision engine to the product's report
//! export and analysis display surfaces:
//! - Decision evaluation with caller-side memoization
//! - Audit trail events for every evaluation
//! - Prometheus metrics and security headers

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{DecisionCache, DecisionService};
pub use state::AppState;
