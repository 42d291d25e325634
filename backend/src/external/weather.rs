//! OpenWeatherMap client for current conditions and geocoding
//!
//! Queries are scoped to India (`{city},IN`) the way the original Gujarat
//! deployment issued them.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use shared::{GpsCoordinates, Provenance, WeatherReading};

use crate::config::PLACEHOLDER_WEATHER_KEY;
use crate::external::FetchError;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

/// OpenWeatherMap current-weather response
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, Deserialize, Default)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
    #[serde(rename = "24h")]
    twenty_four_hours: Option<f64>,
}

/// OpenWeatherMap geocoding response entry
#[derive(Debug, Deserialize)]
struct OwmGeoEntry {
    lat: f64,
    lon: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            timeout,
        }
    }

    fn check_key(&self) -> Result<(), FetchError> {
        if self.api_key == PLACEHOLDER_WEATHER_KEY {
            return Err(FetchError::KeyNotConfigured);
        }
        Ok(())
    }

    /// Fetch current conditions for an Indian city by name.
    pub async fn current_weather(&self, location: &str) -> Result<WeatherReading, FetchError> {
        self.check_key()?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        let query = format!("{},IN", location);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", &self.api_key),
                ("units", "metric"),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(map_current_response(data))
    }

    /// Resolve an Indian city name to coordinates via the geocoding API.
    pub async fn geocode(&self, location: &str) -> Result<GpsCoordinates, FetchError> {
        self.check_key()?;

        let url = format!("{}/geo/1.0/direct", self.base_url);
        let query = format!("{},IN", location);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("limit", "1"),
                ("appid", &self.api_key),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let entries: Vec<OwmGeoEntry> = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let first = entries.first().ok_or(FetchError::NoResults)?;
        Ok(GpsCoordinates::new(first.lat, first.lon))
    }
}

/// Convert an OpenWeatherMap current response to our format
fn map_current_response(data: OwmCurrentResponse) -> WeatherReading {
    let description = data
        .weather
        .first()
        .map(|c| c.description.clone())
        .unwrap_or_default();
    let rainfall = derive_rainfall(data.rain.as_ref(), &description);

    WeatherReading {
        temperature: data.main.temp,
        humidity: data.main.humidity,
        rainfall,
        description,
        source: Provenance::RealApi,
    }
}

/// Pick a rainfall figure from the gauges the API may report.
///
/// Preference order is 1h, then 3h, then 24h. When no gauge value exists
/// but the description says it is raining, report a nominal light rain of
/// 0.5 mm rather than zero.
fn derive_rainfall(rain: Option<&OwmRain>, description: &str) -> f64 {
    let gauged = rain.and_then(|r| {
        r.one_hour
            .or(r.three_hour)
            .or(r.twenty_four_hours)
    });
    if let Some(mm) = gauged {
        if mm > 0.0 {
            return mm;
        }
    }

    let desc = description.to_lowercase();
    if ["rain", "drizzle", "shower"].iter().any(|w| desc.contains(w)) {
        0.5
    } else {
        0.0
    }
}
