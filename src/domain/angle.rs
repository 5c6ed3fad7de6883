//! Hexadecimal orientation to angle conversion
//!
//! Orientation readings are 16-bit fixed-point fractions of a full turn:
//! `0x0000` is 0°, `0x8000` is 180°, and `0xFFFF` is just short of 360°.
//! Nothing in this module knows about windows or consoles.

use std::fmt;

use thiserror::Error;

/// Text shown in place of an angle when the input cannot be parsed
pub const INVALID_INPUT: &str = "无效的输入";

/// Number of fractional digits in a rendered angle
pub const ANGLE_PRECISION: usize = 4;

/// Reasons a piece of text is not a hexadecimal orientation value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("no hexadecimal digits")]
    Empty,

    #[error("'{ch}' at position {position} is not a hexadecimal digit")]
    InvalidDigit { ch: char, position: usize },

    #[error("value does not fit in 32 bits")]
    Overflow,
}

/// Raw orientation value as read from the input field
///
/// Values wider than 16 bits are kept as-is. They scale past 360°
/// instead of being clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrientationValue(pub u32);

impl OrientationValue {
    /// Raw units in one full turn
    pub const UNITS_PER_TURN: f64 = 65536.0;
    pub const DEGREES_PER_TURN: f64 = 360.0;

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Scales the raw value onto degrees
    pub fn to_angle(self) -> Angle {
        Angle((f64::from(self.0) / Self::UNITS_PER_TURN) * Self::DEGREES_PER_TURN)
    }
}

/// Angle in decimal degrees
///
/// `Display` renders exactly four fractional digits. Rust's formatter
/// rounds the exact binary value, so true ties go to the even digit
/// (0.703125 renders as `0.7031`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", ANGLE_PRECISION, self.0)
    }
}

/// Parses hexadecimal text, with an optional `0x`/`0X` prefix
///
/// Only ASCII hex digits are accepted after the prefix. Signs, whitespace
/// and separators are rejected.
pub fn parse_orientation(text: &str) -> Result<OrientationValue, ConvertError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }

    if let Some((position, ch)) = digits
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_hexdigit())
    {
        return Err(ConvertError::InvalidDigit { ch, position });
    }

    // Every character is a hex digit at this point, so overflow is the only failure left.
    u32::from_str_radix(digits, 16)
        .map(OrientationValue)
        .map_err(|_| ConvertError::Overflow)
}

/// Parses and scales in one step, keeping the failure reason
pub fn try_convert(text: &str) -> Result<Angle, ConvertError> {
    parse_orientation(text).map(OrientationValue::to_angle)
}

/// Converts hexadecimal text into a display string
///
/// Never fails: unparseable input yields [`INVALID_INPUT`].
pub fn convert(text: &str) -> String {
    match try_convert(text) {
        Ok(angle) => angle.to_string(),
        Err(_) => INVALID_INPUT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn converts_reference_values() {
        assert_eq!(convert("0x0"), "0.0000");
        assert_eq!(convert("8000"), "180.0000");
        assert_eq!(convert("4000"), "90.0000");
        assert_eq!(convert("FFFF"), "359.9945");
        assert_eq!(convert("ffff"), "359.9945");
    }

    #[test]
    fn prefix_is_optional_and_case_insensitive() {
        assert_eq!(convert("0X0"), "0.0000");
        assert_eq!(convert("0x0"), "0.0000");
        assert_eq!(convert("0"), "0.0000");
        assert_eq!(convert("0xC000"), convert("C000"));
        assert_eq!(convert("0XC000"), "270.0000");
    }

    #[test]
    fn invalid_input_yields_placeholder() {
        assert_eq!(convert(""), INVALID_INPUT);
        assert_eq!(convert("zz"), INVALID_INPUT);
        assert_eq!(convert("0x"), INVALID_INPUT);
        assert_eq!(convert("+ff"), INVALID_INPUT);
        assert_eq!(convert(" ff"), INVALID_INPUT);
        assert_eq!(convert("ff "), INVALID_INPUT);
        assert_eq!(convert("12zz"), INVALID_INPUT);
        assert_eq!(convert("0x0x1"), INVALID_INPUT);
    }

    #[test]
    fn parse_errors_carry_reason() {
        assert_eq!(parse_orientation(""), Err(ConvertError::Empty));
        assert_eq!(parse_orientation("0X"), Err(ConvertError::Empty));
        assert_eq!(
            parse_orientation("0x1g"),
            Err(ConvertError::InvalidDigit { ch: 'g', position: 1 })
        );
        assert_eq!(
            parse_orientation("方向"),
            Err(ConvertError::InvalidDigit { ch: '方', position: 0 })
        );
        assert_eq!(parse_orientation("100000000"), Err(ConvertError::Overflow));
    }

    #[test]
    fn values_wider_than_16_bits_are_not_clamped() {
        assert_eq!(convert("10000"), "360.0000");
        assert_eq!(convert("18000"), "540.0000");
        assert_eq!(convert("FFFFFFFF"), "23592959.9945");
        assert_eq!(convert("000000000000FFFF"), "359.9945");
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 0x80 is exactly 0.703125 degrees
        assert_eq!(OrientationValue(0x80).to_angle().degrees(), 0.703125);
        assert_eq!(convert("80"), "0.7031");
    }

    #[test]
    fn angle_display_uses_four_digits() {
        assert_eq!(OrientationValue(1).to_angle().to_string(), "0.0055");
        assert_eq!(Angle(12.5).to_string(), "12.5000");
    }

    proptest! {
        #[test]
        fn conversion_is_pure(value in any::<u32>(), upper in any::<bool>()) {
            let text = if upper { format!("{value:X}") } else { format!("0x{value:x}") };
            prop_assert_eq!(convert(&text), convert(&text));
        }

        #[test]
        fn conversion_is_monotonic(a in 0u32..=0xFFFF, b in 0u32..=0xFFFF) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_angle: f64 = convert(&format!("{low:X}")).parse().unwrap();
            let high_angle: f64 = convert(&format!("{high:X}")).parse().unwrap();
            prop_assert!(low_angle <= high_angle);
            prop_assert!((0.0..360.0).contains(&high_angle));
        }
    }
}
