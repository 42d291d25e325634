//! Shared types and models for the Gujarat Crop Advisory Service
//!
//! This crate contains the domain model shared between the backend server
//! and any future consumers of the advisory API.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
