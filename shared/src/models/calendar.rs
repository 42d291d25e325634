//! Crop calendar models

use serde::{Deserialize, Serialize};

/// Planting and harvest windows for a crop in Gujarat.
///
/// Months are free text rather than numbers: the calendar includes entries
/// like "Year-round" (vegetables) and "Varies by region" (unknown crops).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropCalendar {
    pub planting_start: String,
    pub planting_end: String,
    pub harvest_start: String,
    pub harvest_end: String,
    /// Regional note, e.g. "Major crop in Saurashtra and North Gujarat"
    pub gujarat_notes: String,
}
