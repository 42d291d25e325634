//! Classifier input model

use serde::{Deserialize, Serialize};

/// Number of features the crop classifier consumes.
pub const FEATURE_COUNT: usize = 7;

/// Ordered feature vector for the crop classifier.
///
/// Field order matches the training data columns:
/// N, P, K, temperature, humidity, ph, rainfall. Values are taken as-is;
/// physical ranges are not validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionInput {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl PredictionInput {
    /// Flatten into the column order the classifier was trained on.
    pub fn as_features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}
