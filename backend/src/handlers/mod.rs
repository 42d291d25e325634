//! HTTP handlers for the advisory API

pub mod enrichment;
pub mod health;
pub mod prediction;
pub mod prices;

pub use enrichment::fetch_location_data;
pub use health::health_check;
pub use prediction::predict_crop;
pub use prices::get_crop_prices;
