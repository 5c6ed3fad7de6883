//! Platform-specific Windows implementations
//!
//! This module encapsulates the Win32 calls that are not tied to a single
//! window: DPI awareness, GDI font ownership and conversions between
//! domain and Win32 types.

pub mod dpi;
pub mod font;
pub mod windows;
