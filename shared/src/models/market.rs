//! Mandi price models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Provenance;

/// Wholesale price for a crop at a Gujarat mandi.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub crop: String,
    /// Price in rupees per quintal (100 kg)
    pub price_per_quintal: f64,
    /// Mandi where the price was quoted, e.g. "APMC Ahmedabad"
    pub market: String,
    pub date: NaiveDate,
    pub region: String,
    pub notes: String,
    pub source: Provenance,
}
