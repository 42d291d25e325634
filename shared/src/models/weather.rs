//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::Provenance;

/// Current conditions for a location, live or from the fallback table.
///
/// Ephemeral per request; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Recent rainfall in millimetres
    pub rainfall: f64,
    /// Free-text conditions, e.g. "clear sky"
    pub description: String,
    pub source: Provenance,
}
