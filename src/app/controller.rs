//! Application controller and coordination layer
//!
//! The controller sits between a display shell and the pure converter.
//! Shells forward every text change here and display whatever comes back;
//! they never call into the domain directly.

use tracing::trace;

use crate::config::LayoutConfig;
use crate::domain::angle;

/// Turns input-field text into output-field text
///
/// Holds no history. The only state is the input field's character cap,
/// which shells with a hard field limit enforce themselves and other
/// shells rely on this type to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionController {
    input_limit: usize,
}

impl ConversionController {
    pub fn new(input_limit: usize) -> Self {
        Self { input_limit }
    }

    pub fn from_layout(config: &LayoutConfig) -> Self {
        Self::new(config.input_limit)
    }

    pub fn input_limit(&self) -> usize {
        self.input_limit
    }

    /// Handles a "text changed" notification from the input field
    ///
    /// Text past the field cap is dropped before conversion, the same as a
    /// field that never accepted it.
    pub fn on_input_changed(&self, text: &str) -> String {
        let visible = truncate_chars(text, self.input_limit);
        let output = angle::convert(visible);
        trace!(input = visible, output = %output, "converted input");
        output
    }
}

impl Default for ConversionController {
    fn default() -> Self {
        Self::from_layout(&LayoutConfig::default())
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
