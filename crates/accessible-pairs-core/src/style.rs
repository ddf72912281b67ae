//! Paint styles and the solid-opaque filter.

use crate::color::{Color, Rgb255};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of paint attached to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    /// Flat color
    #[default]
    Solid,
    /// Linear gradient
    GradientLinear,
    /// Radial gradient
    GradientRadial,
    /// Angular (conic) gradient
    GradientAngular,
    /// Diamond gradient
    GradientDiamond,
    /// Image fill
    Image,
    /// Video fill
    Video,
    /// Any paint kind not listed above
    #[serde(other)]
    Other,
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solid => "SOLID",
            Self::GradientLinear => "GRADIENT_LINEAR",
            Self::GradientRadial => "GRADIENT_RADIAL",
            Self::GradientAngular => "GRADIENT_ANGULAR",
            Self::GradientDiamond => "GRADIENT_DIAMOND",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// One fill of a paint style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint kind
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    /// Opacity [0.0, 1.0]
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Color, present for solid paints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

const fn default_opacity() -> f64 {
    1.0
}

impl Paint {
    /// Fully opaque solid paint.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            paint_type: PaintType::Solid,
            opacity: 1.0,
            color: Some(color),
        }
    }

    /// Set opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Color-less paint of another kind (gradients, images).
    #[must_use]
    pub const fn other(paint_type: PaintType) -> Self {
        Self {
            paint_type,
            opacity: 1.0,
            color: None,
        }
    }
}

/// Named style with an ordered fill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    /// Style name
    pub name: String,
    /// Fills; only the first one is consulted
    #[serde(default)]
    pub paints: Vec<Paint>,
}

impl PaintStyle {
    /// Create a style.
    #[must_use]
    pub fn new(name: impl Into<String>, paints: Vec<Paint>) -> Self {
        Self {
            name: name.into(),
            paints,
        }
    }

    /// Style with a single opaque solid fill.
    #[must_use]
    pub fn solid(name: impl Into<String>, color: Color) -> Self {
        Self::new(name, vec![Paint::solid(color)])
    }

    /// Apply the solid-opaque filter to the first paint.
    ///
    /// # Errors
    ///
    /// Returns the reason the style does not qualify.
    pub fn qualify(&self) -> Result<SolidStyle, SkipReason> {
        let paint = self.paints.first().ok_or(SkipReason::NoPaints)?;
        if paint.paint_type != PaintType::Solid {
            return Err(SkipReason::NotSolid(paint.paint_type));
        }
        if paint.opacity != 1.0 {
            return Err(SkipReason::Translucent(paint.opacity));
        }
        let color = paint.color.ok_or(SkipReason::MissingColor)?;
        color.validate().map_err(SkipReason::InvalidColor)?;
        Ok(SolidStyle::new(self.name.clone(), color))
    }
}

/// A qualifying style: named, solid, opaque and validated.
///
/// Quantization and luminance are computed once here so that pair scoring
/// only combines two cached luminances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidStyle {
    /// Style name
    pub name: String,
    /// Source color
    pub color: Color,
    /// Quantized color
    pub rgb: Rgb255,
    /// Relative luminance of `rgb`
    pub luminance: f64,
}

impl SolidStyle {
    /// Build from an already validated color.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        let rgb = color.to_rgb255();
        Self {
            name: name.into(),
            color,
            rgb,
            luminance: rgb.relative_luminance(),
        }
    }
}

/// Why a style was left out of pairing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    /// Style has no fills
    #[error("no paints")]
    NoPaints,
    /// First fill is not a solid color
    #[error("first paint is {0}, not SOLID")]
    NotSolid(PaintType),
    /// First fill has opacity other than 1
    #[error("opacity {0} is not 1")]
    Translucent(f64),
    /// Solid fill carries no color
    #[error("solid paint has no color")]
    MissingColor,
    /// Color channels failed validation
    #[error(transparent)]
    InvalidColor(ColorError),
}

impl SkipReason {
    /// Whether the skip is a rejected input rather than a filtered paint.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidColor(_))
    }
}

/// A style that did not qualify.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStyle {
    /// Style name
    pub name: String,
    /// Reason
    pub reason: SkipReason,
}

/// Result of filtering a style list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qualification {
    /// Qualifying styles, in input order
    pub qualified: Vec<SolidStyle>,
    /// Everything else, in input order
    pub skipped: Vec<SkippedStyle>,
}

/// Split styles into qualifying and skipped, preserving input order.
///
/// A bad style never aborts the pass.
#[must_use]
pub fn qualify_styles(styles: &[PaintStyle]) -> Qualification {
    let mut out = Qualification::default();
    for style in styles {
        match style.qualify() {
            Ok(solid) => out.qualified.push(solid),
            Err(reason) => out.skipped.push(SkippedStyle {
                name: style.name.clone(),
                reason,
            }),
        }
    }
    out
}
