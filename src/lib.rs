//! hexdir converts 16-bit hexadecimal orientation values into degrees.
//!
//! The conversion lives in [`domain`]. [`ui`] holds the two display shells
//! (a Win32 window on Windows, a console prompt elsewhere), both driven
//! through [`app::ConversionController`].

pub mod app;
pub mod config;
pub mod domain;
#[cfg(windows)]
pub mod platform;
pub mod ui;

pub use domain::{convert, INVALID_INPUT};
