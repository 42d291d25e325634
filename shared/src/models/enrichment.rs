//! Aggregated enrichment responses

use serde::{Deserialize, Serialize};

use crate::models::{CropCalendar, MarketPrice, SoilProfile, WeatherReading};
use crate::types::{GpsCoordinates, Provenance};

/// A location query resolved to coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedLocation {
    /// The city name as the caller supplied it
    pub query: String,
    pub coordinates: GpsCoordinates,
    pub source: Provenance,
}

/// Everything the service knows about a location: weather, soil, and the
/// coordinates the soil lookup was keyed by. Each field degrades to the
/// static tables independently; none is ever absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationEnrichment {
    pub weather: WeatherReading,
    pub soil: SoilProfile,
    pub coordinates: ResolvedLocation,
}

/// Calendar and price information for a recommended crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropDetails {
    pub timing: CropCalendar,
    pub prices: MarketPrice,
}
