//! HTTP handler for location enrichment

use axum::{extract::State, Json};
use serde::Deserialize;

use shared::{validate_location, LocationEnrichment};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub location: Option<String>,
}

/// Fetch weather, soil, and coordinate data for a location
pub async fn fetch_location_data(
    State(state): State<AppState>,
    Json(request): Json<LocationRequest>,
) -> AppResult<Json<LocationEnrichment>> {
    let location = request.location.as_deref().unwrap_or_default();
    let location =
        validate_location(location).map_err(|msg| AppError::Validation(msg.to_string()))?;

    Ok(Json(state.enrichment.enrich(location).await))
}
