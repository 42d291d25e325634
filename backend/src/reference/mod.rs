//! Static Gujarat reference tables
//!
//! Fallback data used whenever a remote fetch fails: city coordinates and
//! typical weather, the regional soil profile, the crop calendar, and mandi
//! reference prices. The tables are loaded once at startup from a versioned
//! JSON file embedded in the binary and are immutable afterwards.
//!
//! City lookup is a case-insensitive substring match of the table key within
//! the query ("Near Surat City" matches "surat"); entries are tried in file
//! order and the first match wins. Crop lookup is lowercase exact match.

use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;

use shared::{
    CropCalendar, GpsCoordinates, MarketPrice, Provenance, ResolvedLocation, SoilProfile,
    WeatherReading,
};

const GUJARAT_REFERENCE: &str = include_str!("../../data/gujarat_reference.json");

/// Immutable lookup tables for Gujarat fallback data.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTables {
    pub version: u32,
    city_coordinates: Vec<CityCoordinates>,
    default_coordinates: RawCoordinates,
    city_weather: Vec<CityWeather>,
    default_weather: RawWeather,
    soil: RawSoil,
    crop_calendar: HashMap<String, CropCalendar>,
    default_calendar: CropCalendar,
    crop_prices: HashMap<String, f64>,
    default_price: f64,
    default_market: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CityCoordinates {
    city: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct CityWeather {
    city: String,
    #[serde(flatten)]
    weather: RawWeather,
}

#[derive(Debug, Clone, Deserialize)]
struct RawWeather {
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawSoil {
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
    organic_carbon: f64,
    soil_type: String,
}

impl ReferenceTables {
    /// Parse the embedded reference data file.
    pub fn load() -> anyhow::Result<Self> {
        let tables: ReferenceTables = serde_json::from_str(GUJARAT_REFERENCE)?;
        tracing::debug!(
            version = tables.version,
            cities = tables.city_coordinates.len(),
            crops = tables.crop_calendar.len(),
            "loaded Gujarat reference tables"
        );
        Ok(tables)
    }

    /// Resolve a location to coordinates from the city table.
    ///
    /// Unmatched queries default to Ahmedabad.
    pub fn coordinates_for(&self, location: &str) -> ResolvedLocation {
        let query = location.to_lowercase();
        let coords = self
            .city_coordinates
            .iter()
            .find(|entry| query.contains(&entry.city))
            .map(|entry| GpsCoordinates::new(entry.lat, entry.lon))
            .unwrap_or_else(|| {
                GpsCoordinates::new(self.default_coordinates.lat, self.default_coordinates.lon)
            });

        ResolvedLocation {
            query: location.to_string(),
            coordinates: coords,
            source: Provenance::SampleData,
        }
    }

    /// Typical weather for a Gujarat city, or the generic Gujarat row.
    pub fn weather_for(&self, location: &str) -> WeatherReading {
        let query = location.to_lowercase();
        let raw = self
            .city_weather
            .iter()
            .find(|entry| query.contains(&entry.city))
            .map(|entry| &entry.weather)
            .unwrap_or(&self.default_weather);

        WeatherReading {
            temperature: raw.temperature,
            humidity: raw.humidity,
            rainfall: raw.rainfall,
            description: raw.description.clone(),
            source: Provenance::SampleData,
        }
    }

    /// The regional soil profile used when the soil API is unavailable.
    pub fn soil_fallback(&self) -> SoilProfile {
        SoilProfile {
            nitrogen: self.soil.nitrogen,
            phosphorus: self.soil.phosphorus,
            potassium: self.soil.potassium,
            ph: self.soil.ph,
            organic_carbon: self.soil.organic_carbon,
            soil_type: self.soil.soil_type.clone(),
            source: Provenance::SampleData,
        }
    }

    /// Planting and harvest windows for a crop (lowercase exact match).
    pub fn calendar_for(&self, crop: &str) -> CropCalendar {
        self.crop_calendar
            .get(&crop.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.default_calendar.clone())
    }

    /// Reference mandi price for a crop (lowercase exact match).
    pub fn price_for(&self, crop: &str) -> MarketPrice {
        let price = self
            .crop_prices
            .get(&crop.to_lowercase())
            .copied()
            .unwrap_or(self.default_price);

        MarketPrice {
            crop: crop.to_string(),
            price_per_quintal: price,
            market: self.default_market.clone(),
            date: Utc::now().date_naive(),
            region: "Gujarat, India".to_string(),
            notes: "Prices may vary by mandi and season".to_string(),
            source: Provenance::SampleData,
        }
    }

    /// Crops with a calendar entry, for diagnostics and tests.
    pub fn known_crops(&self) -> impl Iterator<Item = &str> {
        self.crop_calendar.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_resolves_city() {
        let tables = ReferenceTables::load().unwrap();
        let resolved = tables.coordinates_for("village near Rajkot district");
        assert_eq!(resolved.coordinates, GpsCoordinates::new(22.3039, 70.8022));
        assert_eq!(resolved.source, Provenance::SampleData);
    }

    #[test]
    fn unmatched_city_defaults_to_ahmedabad() {
        let tables = ReferenceTables::load().unwrap();
        let resolved = tables.coordinates_for("Mumbai");
        assert_eq!(resolved.coordinates, GpsCoordinates::new(23.0225, 72.5714));
    }

    #[test]
    fn weather_table_covers_eight_cities() {
        let tables = ReferenceTables::load().unwrap();
        assert_eq!(tables.city_weather.len(), 8);
        let surat = tables.weather_for("SURAT");
        assert_eq!(surat.temperature, 30.2);
        assert_eq!(surat.rainfall, 2.5);
    }

    #[test]
    fn unknown_city_gets_generic_weather() {
        let tables = ReferenceTables::load().unwrap();
        let weather = tables.weather_for("Pune");
        assert_eq!(weather.description, "typical gujarat weather");
        assert_eq!(weather.temperature, 31.0);
    }

    #[test]
    fn calendar_has_twenty_crops() {
        let tables = ReferenceTables::load().unwrap();
        assert_eq!(tables.known_crops().count(), 20);
        let cotton = tables.calendar_for("Cotton");
        assert_eq!(cotton.planting_start, "May");
        assert_eq!(cotton.harvest_end, "November");
    }

    #[test]
    fn unknown_crop_calendar_varies_by_region() {
        let tables = ReferenceTables::load().unwrap();
        let calendar = tables.calendar_for("durian");
        assert_eq!(calendar.planting_start, "Varies by region");
    }

    #[test]
    fn unknown_crop_price_is_default() {
        let tables = ReferenceTables::load().unwrap();
        let price = tables.price_for("durian");
        assert_eq!(price.price_per_quintal, 2500.0);
        assert_eq!(price.source, Provenance::SampleData);
    }
}
