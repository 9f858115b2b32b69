//! The normalized `(x, y)` pair produced by the parser.

use std::fmt;

/// Fractional offsets of an object inside its box.
///
/// Well-formed values keep both axes in `[0, 1]`. Malformed percentages
/// carry NaN through unchanged, so `PartialEq` follows float semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectPosition {
    pub x: f64,
    pub y: f64,
}

impl ObjectPosition {
    /// `center center`, the initial value of `object-position`.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<ObjectPosition> for (f64, f64) {
    fn from(pos: ObjectPosition) -> Self {
        pos.to_tuple()
    }
}

impl From<(f64, f64)> for ObjectPosition {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Formats as two CSS percentages, e.g. `30% 70%`.
impl fmt::Display for ObjectPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            format_percentage(self.x),
            format_percentage(self.y)
        )
    }
}

/// Format a fraction as a CSS percentage.
///
/// The decimal point of the shortest round-trip form is shifted two places
/// instead of multiplying by 100, so `0.07` becomes `7%` rather than
/// `7.000000000000001%`. Non-finite values use the spellings the percentage
/// reader accepts back.
pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity%" } else { "-Infinity%" };
        return text.to_string();
    }

    // f64's Display never uses exponent notation.
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut frac = frac_part.to_string();
    while frac.len() < 2 {
        frac.push('0');
    }
    let (moved, rest) = frac.split_at(2);

    let int = format!("{int_part}{moved}");
    let int = match int.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let rest = rest.trim_end_matches('0');

    if rest.is_empty() {
        format!("{sign}{int}%")
    } else {
        format!("{sign}{int}.{rest}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_center() {
        assert_eq!(ObjectPosition::default(), ObjectPosition::new(0.5, 0.5));
    }

    #[test]
    fn test_tuple_conversions() {
        let pos = ObjectPosition::from((0.25, 0.75));
        let tuple: (f64, f64) = pos.into();
        assert_eq!(tuple, (0.25, 0.75));
    }

    #[test]
    fn test_is_finite() {
        assert!(ObjectPosition::CENTER.is_finite());
        assert!(!ObjectPosition::new(f64::NAN, 0.0).is_finite());
        assert!(!ObjectPosition::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_format_whole_percentages() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(0.3), "30%");
        assert_eq!(format_percentage(0.5), "50%");
        assert_eq!(format_percentage(1.0), "100%");
        assert_eq!(format_percentage(12.5), "1250%");
    }

    #[test]
    fn test_format_avoids_binary_noise() {
        assert_eq!(format_percentage(0.07), "7%");
        assert_eq!(format_percentage(0.29), "29%");
    }

    #[test]
    fn test_format_fractional_percentages() {
        assert_eq!(format_percentage(0.255), "25.5%");
        assert_eq!(format_percentage(0.001), "0.1%");
        assert_eq!(format_percentage(0.505), "50.5%");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_percentage(-0.2), "-20%");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_percentage(f64::NAN), "NaN%");
        assert_eq!(format_percentage(f64::INFINITY), "Infinity%");
        assert_eq!(format_percentage(f64::NEG_INFINITY), "-Infinity%");
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectPosition::new(0.3, 0.7).to_string(), "30% 70%");
        assert_eq!(ObjectPosition::CENTER.to_string(), "50% 50%");
    }
}
