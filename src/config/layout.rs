use thiserror::Error;

/// Logical (96 DPI) geometry and font settings for the converter window
///
/// All lengths are in logical pixels. They are scaled to the window's DPI
/// by [`crate::ui::layout::ControlLayout::for_dpi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub margin_x: i32,
    pub margin_y: i32,
    pub control_width: i32,
    pub control_height: i32,
    pub label_height: i32,
    pub spacing_y: i32,
    pub font_height: i32,
    pub font_face: &'static str,
    /// Maximum number of characters accepted by the input field
    pub input_limit: usize,
}

impl LayoutConfig {
    pub const BASE_DPI: u32 = 96;
    /// Face names are stored in a 32-unit buffer including the terminator
    pub const MAX_FACE_UNITS: usize = 31;

    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        let lengths = [
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("spacing_y", self.spacing_y),
        ];
        if let Some((field, value)) = lengths.into_iter().find(|(_, value)| *value < 0) {
            return Err(LayoutConfigError::NegativeLength { field, value });
        }

        let sizes = [
            ("control_width", self.control_width),
            ("control_height", self.control_height),
            ("label_height", self.label_height),
            ("font_height", self.font_height),
        ];
        if let Some((field, value)) = sizes.into_iter().find(|(_, value)| *value <= 0) {
            return Err(LayoutConfigError::EmptySize { field, value });
        }

        if self.input_limit == 0 {
            return Err(LayoutConfigError::ZeroInputLimit);
        }

        let face_units = self.font_face.encode_utf16().count();
        if face_units == 0 || face_units > Self::MAX_FACE_UNITS {
            return Err(LayoutConfigError::InvalidFontFace {
                face: self.font_face.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_x: 20,
            margin_y: 20,
            control_width: 200,
            control_height: 25,
            label_height: 20,
            spacing_y: 15,
            font_height: 14,
            font_face: "黑体",
            input_limit: 63,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutConfigError {
    #[error("Layout length {field} must not be negative (got {value})")]
    NegativeLength { field: &'static str, value: i32 },
    #[error("Layout size {field} must be positive (got {value})")]
    EmptySize { field: &'static str, value: i32 },
    #[error("Input field must accept at least one character")]
    ZeroInputLimit,
    #[error("Font face {face:?} must be 1 to 31 UTF-16 units long")]
    InvalidFontFace { face: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let config = LayoutConfig {
            control_height: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutConfigError::EmptySize { field: "control_height", value: 0 })
        );

        let config = LayoutConfig {
            margin_y: -1,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutConfigError::NegativeLength { field: "margin_y", value: -1 })
        );
    }

    #[test]
    fn rejects_zero_input_limit() {
        let config = LayoutConfig {
            input_limit: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.validate(), Err(LayoutConfigError::ZeroInputLimit));
    }

    #[test]
    fn rejects_oversized_font_face() {
        let config = LayoutConfig {
            font_face: "A font family name that is far too long for LOGFONT",
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutConfigError::InvalidFontFace { .. })
        ));
    }
}
