//! WCAG contrast ratio with two-decimal floor.

use crate::color::Rgb255;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Luminance offset for ambient flare.
const FLARE: f64 = 0.05;

/// Contrast ratio between two colors, floored to two decimal places.
///
/// Always in [1.0, 21.0] for valid inputs. Flooring (not rounding) keeps a
/// pair at 2.999 below a 3.0 threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContrastScore(f64);

impl ContrastScore {
    /// Lowest possible score (identical luminance).
    pub const MIN: Self = Self(1.0);
    /// Highest possible score (black on white).
    pub const MAX: Self = Self(21.0);

    /// Build a score from two relative luminances, in either order.
    #[must_use]
    pub fn from_luminances(first: f64, second: f64) -> Self {
        let a = first + FLARE;
        let b = second + FLARE;
        let mut ratio = a / b;
        if b > a {
            ratio = 1.0 / ratio;
        }
        Self(floor_hundredths(ratio))
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the score clears `threshold` (inclusive).
    #[must_use]
    pub fn meets(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for ContrastScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn floor_hundredths(ratio: f64) -> f64 {
    (ratio * 100.0).floor() / 100.0
}

/// Calculate the contrast ratio between two 8-bit colors.
///
/// See: <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
#[must_use]
pub fn contrast_ratio(first: Rgb255, second: Rgb255) -> ContrastScore {
    ContrastScore::from_luminances(first.relative_luminance(), second.relative_luminance())
}

/// WCAG 2.1 success level reached by a contrast score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    /// Below 3:1
    Fail,
    /// 3:1, large text and UI components only
    AaLarge,
    /// 4.5:1, normal text
    Aa,
    /// 7:1, enhanced
    Aaa,
}

impl WcagLevel {
    /// Large text / UI component threshold.
    pub const AA_LARGE_RATIO: f64 = 3.0;
    /// Normal text threshold.
    pub const AA_RATIO: f64 = 4.5;
    /// Enhanced threshold.
    pub const AAA_RATIO: f64 = 7.0;

    /// Highest level the score reaches.
    #[must_use]
    pub fn classify(score: ContrastScore) -> Self {
        match score.value() {
            v if v >= Self::AAA_RATIO => Self::Aaa,
            v if v >= Self::AA_RATIO => Self::Aa,
            v if v >= Self::AA_LARGE_RATIO => Self::AaLarge,
            _ => Self::Fail,
        }
    }

    /// Short label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
