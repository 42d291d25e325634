//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Where an externally sourced value came from.
///
/// Every entity filled from a third-party API carries one of these so a
/// caller can tell a live reading from the static Gujarat fallback tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Provenance {
    #[serde(rename = "Real API")]
    RealApi,
    #[serde(rename = "Sample data")]
    SampleData,
}

impl Provenance {
    pub fn is_live(&self) -> bool {
        matches!(self, Provenance::RealApi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_serializes_to_legacy_labels() {
        assert_eq!(
            serde_json::to_string(&Provenance::RealApi).unwrap(),
            "\"Real API\""
        );
        assert_eq!(
            serde_json::to_string(&Provenance::SampleData).unwrap(),
            "\"Sample data\""
        );
    }
}
