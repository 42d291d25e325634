//! Mandi price API client
//!
//! Fetches wholesale crop prices for the Gujarat region. Like the soil
//! endpoint, the URL is configuration; missing response fields fall back to
//! the documented defaults.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;

use shared::{MarketPrice, Provenance};

use crate::external::FetchError;

const DEFAULT_PRICE_PER_QUINTAL: f64 = 2500.0;
const DEFAULT_MARKET: &str = "Gujarat APMC Market";
const REGION: &str = "Gujarat, India";

/// Mandi price API client
#[derive(Clone)]
pub struct MandiClient {
    client: Client,
    base_url: String,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

/// Mandi API response; every field optional
#[derive(Debug, Deserialize)]
struct MandiResponse {
    price: Option<f64>,
    market: Option<String>,
    date: Option<String>,
}

impl MandiClient {
    /// Create a new MandiClient
    pub fn new(base_url: String, endpoint: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            endpoint,
            api_key,
            timeout,
        }
    }

    /// Fetch the current mandi price for a crop in Gujarat.
    pub async fn crop_price(&self, crop: &str) -> Result<MarketPrice, FetchError> {
        let url = format!("{}{}", self.base_url, self.endpoint);
        let crop_param = crop.to_lowercase();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("crop", crop_param.as_str()), ("region", "gujarat")])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let data: MandiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(map_price_response(crop, data))
    }
}

/// Convert a mandi API response to our format, filling gaps with defaults
fn map_price_response(crop: &str, data: MandiResponse) -> MarketPrice {
    let date = data
        .date
        .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    MarketPrice {
        crop: crop.to_string(),
        price_per_quintal: data.price.unwrap_or(DEFAULT_PRICE_PER_QUINTAL),
        market: data.market.unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        date,
        region: REGION.to_string(),
        notes: "Real-time data from API".to_string(),
        source: Provenance::RealApi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_maps_all_fields() {
        let data = MandiResponse {
            price: Some(6650.0),
            market: Some("APMC Rajkot".to_string()),
            date: Some("2025-11-03".to_string()),
        };
        let price = map_price_response("cotton", data);
        assert_eq!(price.crop, "cotton");
        assert_eq!(price.price_per_quintal, 6650.0);
        assert_eq!(price.market, "APMC Rajkot");
        assert_eq!(price.date, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
        assert_eq!(price.source, Provenance::RealApi);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let data = MandiResponse {
            price: None,
            market: None,
            date: Some("not-a-date".to_string()),
        };
        let price = map_price_response("bajra", data);
        assert_eq!(price.price_per_quintal, DEFAULT_PRICE_PER_QUINTAL);
        assert_eq!(price.market, DEFAULT_MARKET);
        assert_eq!(price.date, Utc::now().date_naive());
    }
}
