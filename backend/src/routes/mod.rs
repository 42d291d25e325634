//! Route definitions for the Gujarat Crop Advisory Service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Location enrichment: weather + soil + coordinates
        .route("/fetch-location-data", post(handlers::fetch_location_data))
        // Mandi prices for a crop
        .route("/get-crop-prices", post(handlers::get_crop_prices))
        // Crop prediction with calendar/price enrichment
        .route("/predict", post(handlers::predict_crop))
}
