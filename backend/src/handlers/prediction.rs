//! HTTP handler for crop prediction

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use shared::{CropDetails, PredictionInput};

use crate::services::prediction::MODEL_UNAVAILABLE;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Used only to echo context back to the caller; prediction itself is
    /// a pure function of the features
    #[serde(default)]
    pub location: Option<String>,
    #[serde(flatten)]
    pub features: PredictionInput,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_crop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_info: Option<CropDetails>,
}

/// Predict a crop from the 7-feature input and enrich it with calendar and
/// price data. When no model is loaded the sentinel label comes back alone.
pub async fn predict_crop(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let predicted_crop = state.prediction.predict(&request.features);

    let crop_info = if predicted_crop == MODEL_UNAVAILABLE {
        None
    } else {
        Some(state.enrichment.crop_details(&predicted_crop).await)
    };

    Json(PredictResponse {
        predicted_crop,
        location: request.location,
        crop_info,
    })
}
