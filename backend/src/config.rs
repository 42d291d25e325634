//! Configuration management for the Gujarat Crop Advisory Service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CROP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Sentinel API key shipped in defaults. While the weather key still holds
/// this value the service skips OpenWeatherMap entirely and answers from
/// the sample tables.
pub const PLACEHOLDER_WEATHER_KEY: &str = "YOUR_OPENWEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeatherMap configuration (weather + geocoding)
    pub weather: WeatherConfig,

    /// Soil API configuration
    pub soil: SoilConfig,

    /// Mandi price API configuration
    pub mandi: MandiConfig,

    /// Classifier artifact configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap base URL
    pub base_url: String,

    /// OpenWeatherMap API key
    pub api_key: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SoilConfig {
    /// Soil API base URL
    pub base_url: String,

    /// Soil data endpoint path
    pub endpoint: String,

    /// Soil API bearer token
    pub api_key: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MandiConfig {
    /// Mandi price API base URL
    pub base_url: String,

    /// Price endpoint path
    pub endpoint: String,

    /// Mandi API bearer token
    pub api_key: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the serialized classifier snapshot
    pub path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.base_url", "http://api.openweathermap.org")?
            .set_default("weather.api_key", PLACEHOLDER_WEATHER_KEY)?
            .set_default("weather.timeout_secs", 10)?
            .set_default("soil.base_url", "https://api.soilservice.com")?
            .set_default("soil.endpoint", "/soil-data")?
            .set_default("soil.api_key", "")?
            .set_default("soil.timeout_secs", 15)?
            .set_default("mandi.base_url", "https://api.mandiprices.com")?
            .set_default("mandi.endpoint", "/prices")?
            .set_default("mandi.api_key", "")?
            .set_default("mandi.timeout_secs", 10)?
            .set_default("model.path", "backend/data/crop_model.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROP_ prefix)
            .add_source(
                Environment::with_prefix("CROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}
