//! Application orchestration layer
//!
//! This module coordinates between the display shells and the domain layer.

pub mod controller;

pub use controller::ConversionController;
