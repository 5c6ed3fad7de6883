//! DPI-aware control layout for the converter window
//!
//! Pure geometry: computes where each control goes for a given DPI so the
//! Win32 shell only has to move windows around. Kept free of Win32 types
//! so it can be tested on any host.

use crate::config::LayoutConfig;
use crate::domain::core::Rect;

/// Scales a logical (96 DPI) length to the given DPI
///
/// Rounds half away from zero, the same way `MulDiv(value, dpi, 96)` does.
pub fn scale_for_dpi(value: i32, dpi: u32) -> i32 {
    let base = i64::from(LayoutConfig::BASE_DPI);
    let product = i64::from(value) * i64::from(dpi);
    let half = base / 2;
    let scaled = if product >= 0 {
        (product + half) / base
    } else {
        (product - half) / base
    };
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Positions of the four child controls, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    pub input_label: Rect,
    pub input: Rect,
    pub output_label: Rect,
    pub output: Rect,
    /// Client area needed to show every control plus the outer margins
    pub client_width: i32,
    pub client_height: i32,
    /// GDI font height; negative selects by character height
    pub font_height: i32,
    pub dpi: u32,
}

impl ControlLayout {
    /// Computes the stacked label/field layout for `dpi`
    ///
    /// Offsets are summed in logical units before scaling so rounding
    /// errors do not accumulate down the column.
    pub fn for_dpi(config: &LayoutConfig, dpi: u32) -> Self {
        let scale = |value: i32| scale_for_dpi(value, dpi);
        let x = scale(config.margin_x);
        let width = scale(config.control_width);

        let input_label_top = config.margin_y;
        let input_top = input_label_top + config.label_height;
        let output_label_top = input_top + config.control_height + config.spacing_y;
        let output_top = output_label_top + config.label_height;
        let bottom = output_top + config.control_height + config.margin_y;

        Self {
            input_label: Rect::new(x, scale(input_label_top), width, scale(config.label_height)),
            input: Rect::new(x, scale(input_top), width, scale(config.control_height)),
            output_label: Rect::new(x, scale(output_label_top), width, scale(config.label_height)),
            output: Rect::new(x, scale(output_top), width, scale(config.control_height)),
            client_width: scale(config.margin_x + config.control_width + config.margin_x),
            client_height: scale(bottom),
            font_height: -scale(config.font_height),
            dpi,
        }
    }

    pub fn controls(&self) -> [Rect; 4] {
        [self.input_label, self.input, self.output_label, self.output]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_matches_muldiv() {
        assert_eq!(scale_for_dpi(25, 96), 25);
        assert_eq!(scale_for_dpi(25, 144), 38); // 37.5 rounds away from zero
        assert_eq!(scale_for_dpi(20, 120), 25);
        assert_eq!(scale_for_dpi(14, 192), 28);
        assert_eq!(scale_for_dpi(-25, 144), -38);
        assert_eq!(scale_for_dpi(0, 288), 0);
    }

    #[test]
    fn layout_at_base_dpi() {
        let layout = ControlLayout::for_dpi(&LayoutConfig::default(), 96);

        assert_eq!(layout.input_label, Rect::new(20, 20, 200, 20));
        assert_eq!(layout.input, Rect::new(20, 40, 200, 25));
        assert_eq!(layout.output_label, Rect::new(20, 80, 200, 20));
        assert_eq!(layout.output, Rect::new(20, 100, 200, 25));
        assert_eq!((layout.client_width, layout.client_height), (240, 145));
        assert_eq!(layout.font_height, -14);
    }

    #[test]
    fn layout_at_150_percent() {
        let layout = ControlLayout::for_dpi(&LayoutConfig::default(), 144);

        assert_eq!(layout.input_label, Rect::new(30, 30, 300, 30));
        assert_eq!(layout.input, Rect::new(30, 60, 300, 38));
        assert_eq!(layout.output_label, Rect::new(30, 120, 300, 30));
        assert_eq!(layout.output, Rect::new(30, 150, 300, 38));
        assert_eq!((layout.client_width, layout.client_height), (360, 218));
        assert_eq!(layout.font_height, -21);
    }

    #[test]
    fn controls_fit_inside_client_area() {
        for dpi in [96, 120, 144, 168, 192, 240, 288] {
            let layout = ControlLayout::for_dpi(&LayoutConfig::default(), dpi);
            for rect in layout.controls() {
                let (right, bottom) = rect.extent_from_origin();
                assert!(right <= layout.client_width, "dpi {dpi}: {rect:?}");
                assert!(bottom <= layout.client_height, "dpi {dpi}: {rect:?}");
            }
            assert!(layout.input.y >= layout.input_label.bottom());
            assert!(layout.output_label.y > layout.input.bottom());
        }
    }
}
