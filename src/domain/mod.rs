//! Domain logic and core data structures
//!
//! This module contains the pure conversion logic and geometry types.
//! Nothing here depends on Win32 or on a particular display shell.

pub mod angle;
pub mod core;

pub use angle::{convert, parse_orientation, try_convert, Angle, ConvertError, OrientationValue, INVALID_INPUT};
