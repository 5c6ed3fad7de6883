//! Configuration module for hexdir
//!
//! The converter itself has nothing to configure. This module holds the
//! compile-time geometry and font defaults the window shell lays itself
//! out with, together with their validation.

pub mod layout;

pub use layout::{LayoutConfig, LayoutConfigError};
