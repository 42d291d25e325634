//! Soil data models

use serde::{Deserialize, Serialize};

use crate::types::Provenance;

/// Soil nutrient profile at a coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    /// Nitrogen level (kg/ha)
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// Phosphorus level (kg/ha)
    #[serde(rename = "P")]
    pub phosphorus: f64,
    /// Potassium level (kg/ha)
    #[serde(rename = "K")]
    pub potassium: f64,
    pub ph: f64,
    pub organic_carbon: f64,
    pub soil_type: String,
    pub source: Provenance,
}
