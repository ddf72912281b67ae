//! WCAG contrast engine for accessible color pairs.
//!
//! This crate is the pure core of accessible-pairs:
//! - Color representation: [`Color`], quantized to [`Rgb255`]
//! - Relative luminance and [`contrast_ratio`], floored to a [`ContrastScore`]
//! - Style filtering: [`PaintStyle`] → [`SolidStyle`] via [`qualify_styles`]
//! - Pair enumeration: [`enumerate_pairs`] into a [`PairSet`]
//!
//! Nothing here performs I/O or logging.
//!
//! ```
//! use accessible_pairs_core::{find_accessible_pairs, Color, ContrastConfig, PaintStyle};
//!
//! let styles = vec![
//!     PaintStyle::solid("Paper", Color::WHITE),
//!     PaintStyle::solid("Ink", Color::BLACK),
//! ];
//! let pairs = find_accessible_pairs(&styles, &ContrastConfig::default());
//! assert_eq!(pairs.evaluated(), 4);
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs.pairs()[0].contrast.to_string(), "21.00");
//! ```

mod color;
mod contrast;
mod error;
mod pairs;
mod style;

pub use color::{Color, Rgb255, BLUE_WEIGHT, GREEN_WEIGHT, LINEAR_THRESHOLD, RED_WEIGHT};
pub use contrast::{contrast_ratio, ContrastScore, WcagLevel};
pub use error::{Channel, ColorError};
pub use pairs::{
    enumerate_pairs, find_accessible_pairs, ColorPair, ContrastConfig, Enumeration, PairSet,
    DEFAULT_MIN_CONTRAST,
};
pub use style::{
    qualify_styles, Paint, PaintStyle, PaintType, Qualification, SkipReason, SkippedStyle,
    SolidStyle,
};
