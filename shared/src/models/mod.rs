//! Domain models for the Gujarat Crop Advisory Service

mod calendar;
mod enrichment;
mod market;
mod prediction;
mod soil;
mod weather;

pub use calendar::*;
pub use enrichment::*;
pub use market::*;
pub use prediction::*;
pub use soil::*;
pub use weather::*;
