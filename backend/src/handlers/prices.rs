//! HTTP handler for mandi price lookups

use axum::{extract::State, Json};
use serde::Deserialize;

use shared::{validate_crop_name, MarketPrice};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CropPriceRequest {
    #[serde(default)]
    pub crop: Option<String>,
}

/// Get the current mandi price for a crop
pub async fn get_crop_prices(
    State(state): State<AppState>,
    Json(request): Json<CropPriceRequest>,
) -> AppResult<Json<MarketPrice>> {
    let crop = request.crop.as_deref().unwrap_or_default();
    let crop = validate_crop_name(crop).map_err(|msg| AppError::Validation(msg.to_string()))?;

    Ok(Json(state.enrichment.market_price(crop).await))
}
