//! Location enrichment aggregator
//!
//! Pulls weather, coordinates, soil, and mandi prices together for a
//! location or crop. Every fetch degrades independently: a failed call is
//! logged with its failure kind and replaced by the matching Gujarat
//! reference-table entry, so the response is always fully populated.
//!
//! Weather and coordinate resolution are independent of each other and run
//! concurrently; the soil fetch is keyed by whichever coordinates came back.

use std::sync::Arc;

use shared::{
    CropDetails, LocationEnrichment, MarketPrice, Provenance, ResolvedLocation, SoilProfile,
    WeatherReading,
};

use crate::external::{MandiClient, SoilClient, WeatherClient};
use crate::reference::ReferenceTables;

/// Aggregates the outbound clients behind one fallback policy.
#[derive(Clone)]
pub struct EnrichmentService {
    weather: WeatherClient,
    soil: SoilClient,
    mandi: MandiClient,
    tables: Arc<ReferenceTables>,
}

impl EnrichmentService {
    /// Create a new EnrichmentService with explicit clients
    pub fn new(
        weather: WeatherClient,
        soil: SoilClient,
        mandi: MandiClient,
        tables: Arc<ReferenceTables>,
    ) -> Self {
        Self {
            weather,
            soil,
            mandi,
            tables,
        }
    }

    /// Everything the service knows about a location.
    pub async fn enrich(&self, location: &str) -> LocationEnrichment {
        let (weather, coordinates) = tokio::join!(
            self.current_weather(location),
            self.resolve_location(location),
        );
        let soil = self.soil_profile(&coordinates).await;

        LocationEnrichment {
            weather,
            soil,
            coordinates,
        }
    }

    /// Calendar and price data for a crop, merged.
    ///
    /// Same per-field degradation as [`enrich`](Self::enrich): either half
    /// falling back never empties the other.
    pub async fn crop_details(&self, crop: &str) -> CropDetails {
        CropDetails {
            timing: self.tables.calendar_for(crop),
            prices: self.market_price(crop).await,
        }
    }

    /// Current weather for a city, live or sampled.
    pub async fn current_weather(&self, location: &str) -> WeatherReading {
        match self.weather.current_weather(location).await {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!(
                    location,
                    kind = err.kind(),
                    error = %err,
                    "weather fetch failed, using sample data"
                );
                self.tables.weather_for(location)
            }
        }
    }

    /// Resolve a city name to coordinates, live or from the city table.
    ///
    /// The table lookup defaults to Ahmedabad, so resolution always
    /// succeeds and the soil fetch always has a key.
    pub async fn resolve_location(&self, location: &str) -> ResolvedLocation {
        match self.weather.geocode(location).await {
            Ok(coordinates) => ResolvedLocation {
                query: location.to_string(),
                coordinates,
                source: Provenance::RealApi,
            },
            Err(err) => {
                tracing::warn!(
                    location,
                    kind = err.kind(),
                    error = %err,
                    "geocoding failed, using city table"
                );
                self.tables.coordinates_for(location)
            }
        }
    }

    /// Soil profile at the resolved coordinates, live or sampled.
    pub async fn soil_profile(&self, location: &ResolvedLocation) -> SoilProfile {
        match self.soil.soil_profile(location.coordinates).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(
                    lat = location.coordinates.latitude,
                    lon = location.coordinates.longitude,
                    kind = err.kind(),
                    error = %err,
                    "soil fetch failed, using sample data"
                );
                self.tables.soil_fallback()
            }
        }
    }

    /// Current mandi price for a crop, live or from the price table.
    pub async fn market_price(&self, crop: &str) -> MarketPrice {
        match self.mandi.crop_price(crop).await {
            Ok(price) => price,
            Err(err) => {
                tracing::warn!(
                    crop,
                    kind = err.kind(),
                    error = %err,
                    "mandi price fetch failed, using sample data"
                );
                self.tables.price_for(crop)
            }
        }
    }
}
