//! Color representation and WCAG relative luminance.

use crate::error::{Channel, ColorError};
use serde::{Deserialize, Serialize};

/// Channel value at or below which sRGB expansion is linear.
///
/// This is the WAI constant, not the IEC 61966-2-1 value of 0.04045.
pub const LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance weight of the red channel.
pub const RED_WEIGHT: f64 = 0.2126;
/// Luminance weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Luminance weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.0722;

/// sRGB color with gamma-encoded channels nominally in [0.0, 1.0].
///
/// Construction does not clamp: values are kept as read so that
/// [`Color::validate`] can reject them at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f64,
    /// Green component [0.0, 1.0]
    pub g: f64,
    /// Blue component [0.0, 1.0]
    pub b: f64,
}

impl Color {
    /// Create a color without validating the channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Check every channel is a finite number in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] naming the first bad channel.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (channel, value) in self.channels() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::InvalidColorInput { channel, value });
            }
        }
        Ok(())
    }

    fn channels(&self) -> [(Channel, f64); 3] {
        [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
        ]
    }

    /// Parse a hex color string (e.g., "#1e293b" or "1e293b").
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorError::InvalidLength(hex.len()));
        }

        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or(ColorError::InvalidHex)
        };

        let rgb = Rgb255::new(byte(0..2)?, byte(2..4)?, byte(4..6)?);
        Ok(rgb.to_color())
    }

    /// Convert to hex string via [`Color::to_rgb255`].
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb255().to_hex()
    }

    /// Scale each channel to [0, 255] and round to the nearest integer.
    ///
    /// Total over all inputs: out-of-range values saturate and NaN maps to 0.
    #[must_use]
    pub fn to_rgb255(&self) -> Rgb255 {
        Rgb255::new(
            scale_channel(self.r),
            scale_channel(self.g),
            scale_channel(self.b),
        )
    }

    /// Relative luminance of the 8-bit quantized color.
    ///
    /// See: <https://www.w3.org/WAI/GL/wiki/Relative_luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        self.to_rgb255().relative_luminance()
    }

    /// Contrast ratio against another color, floored to two decimals.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> crate::ContrastScore {
        crate::contrast_ratio(self.to_rgb255(), other.to_rgb255())
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// Half-way cases round up for every non-negative input; negatives saturate
// to 0 either way. `as u8` saturates and maps NaN to 0.
fn scale_channel(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

/// 8-bit sRGB triple used as the input to luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb255 {
    /// Red component [0, 255]
    pub r: u8,
    /// Green component [0, 255]
    pub g: u8,
    /// Blue component [0, 255]
    pub b: u8,
}

impl Rgb255 {
    /// Create a new 8-bit triple.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Back to unit channels.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Calculate relative luminance per the WAI formula.
    ///
    /// Always in [0.0, 1.0] up to floating-point error.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        RED_WEIGHT * linearize(self.r)
            + GREEN_WEIGHT * linearize(self.g)
            + BLUE_WEIGHT * linearize(self.b)
    }
}

/// Gamma-expand an 8-bit sRGB channel.
fn linearize(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb255_rounds_half_up() {
        // 0.5 * 255 = 127.5
        assert_eq!(Color::new(0.5, 0.5, 0.5).to_rgb255(), Rgb255::new(128, 128, 128));
    }

    #[test]
    fn test_to_rgb255_rounds_not_truncates() {
        // 0.999 * 255 = 254.745
        assert_eq!(Color::new(0.999, 0.0, 0.0).to_rgb255().r, 255);
        // 0.002 * 255 = 0.51
        assert_eq!(Color::new(0.0, 0.002, 0.0).to_rgb255().g, 1);
    }

    #[test]
    fn test_to_rgb255_tolerates_out_of_range() {
        let rgb = Color::new(1.5, -0.25, f64::NAN).to_rgb255();
        assert_eq!(rgb, Rgb255::new(255, 0, 0));

        let rgb = Color::new(f64::INFINITY, f64::NEG_INFINITY, 2.0).to_rgb255();
        assert_eq!(rgb, Rgb255::new(255, 0, 255));
    }

    #[test]
    fn test_linearize_threshold_branch() {
        // 10/255 = 0.0392... sits on the linear side of 0.03928
        assert!((linearize(10) - (10.0 / 255.0) / 12.92).abs() < 1e-15);
        // 11/255 = 0.0431... uses the power curve
        let c = 11.0 / 255.0;
        assert!((linearize(11) - ((c + 0.055) / 1.055_f64).powf(2.4)).abs() < 1e-15);
    }

    #[test]
    fn test_linearize_endpoints() {
        assert_eq!(linearize(0), 0.0);
        assert_eq!(linearize(255), 1.0);
    }

    #[test]
    fn test_validate_accepts_unit_range() {
        assert!(Color::new(0.0, 0.5, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_channel() {
        let err = Color::new(0.5, 1.2, -3.0).validate().unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorInput {
                channel: Channel::Green,
                value: 1.2
            }
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let err = Color::new(0.0, 0.0, f64::NAN).validate().unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidColorInput {
                channel: Channel::Blue,
                ..
            }
        ));
    }

    #[test]
    fn test_from_hex_rejects_alpha_suffix() {
        assert_eq!(
            Color::from_hex("#ff000080"),
            Err(ColorError::InvalidLength(8))
        );
    }

    #[test]
    fn test_from_hex_rejects_multibyte() {
        assert_eq!(Color::from_hex("ééé"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn test_rgb255_to_hex() {
        assert_eq!(Rgb255::new(30, 41, 59).to_hex(), "#1e293b");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Color::new(1.0, 0.0, 0.5)).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":0.0,"b":0.5}"#);
    }
}
