//! Gujarat Crop Advisory Service - Backend
//!
//! Recommends a crop for a Gujarat location with a pre-trained classifier
//! and enriches predictions with weather, soil, and mandi price data.
//! Every external fetch degrades to static Gujarat reference tables.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod reference;
pub mod routes;
pub mod services;

pub use config::Config;

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
///
/// Must name this library crate: the fallback warn/error events and the
/// classifier load logs are all emitted from `crop_advisory_backend::*`
/// targets, not from the binary.
pub const DEFAULT_LOG_FILTER: &str =
    "crop_advisory_backend=debug,crop_server=debug,tower_http=debug";

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use services::{EnrichmentService, PredictionService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub enrichment: Arc<EnrichmentService>,
    pub prediction: Arc<PredictionService>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Gujarat Crop Advisory Service API v1.0"
}
