//! Business logic services for the Gujarat Crop Advisory Service

pub mod enrichment;
pub mod prediction;

pub use enrichment::EnrichmentService;
pub use prediction::PredictionService;
