//! Gujarat Crop Advisory Service - Backend Server
//!
//! Serves crop recommendations for Gujarat, India, enriched with weather,
//! soil, and mandi price data from third-party APIs, with static fallback
//! tables when those APIs are unavailable.

use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_advisory_backend::{
    create_app,
    external::{MandiClient, SoilClient, WeatherClient},
    reference::ReferenceTables,
    services::{EnrichmentService, PredictionService},
    AppState, Config, DEFAULT_LOG_FILTER,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Gujarat Crop Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the static Gujarat reference tables
    let tables = Arc::new(ReferenceTables::load()?);

    // Construct the outbound clients from configuration
    let weather_client = WeatherClient::new(
        config.weather.base_url.clone(),
        config.weather.api_key.clone(),
        Duration::from_secs(config.weather.timeout_secs),
    );
    let soil_client = SoilClient::new(
        config.soil.base_url.clone(),
        config.soil.endpoint.clone(),
        config.soil.api_key.clone(),
        Duration::from_secs(config.soil.timeout_secs),
    );
    let mandi_client = MandiClient::new(
        config.mandi.base_url.clone(),
        config.mandi.endpoint.clone(),
        config.mandi.api_key.clone(),
        Duration::from_secs(config.mandi.timeout_secs),
    );

    let enrichment = EnrichmentService::new(weather_client, soil_client, mandi_client, tables);

    // Load the classifier snapshot; the server runs without it
    let prediction = PredictionService::load(Path::new(&config.model.path));

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        enrichment: Arc::new(enrichment),
        prediction: Arc::new(prediction),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
