//! Style document types.

use crate::error::ParseError;
use accessible_pairs_core::{Color, Paint, PaintStyle, PaintType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exported paint styles of a design library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Library name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Styles in library order
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
}

/// One named style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleEntry {
    /// Style name
    pub name: String,
    /// Fills
    #[serde(default)]
    pub paints: Vec<PaintValue>,
}

/// A fill as written: well-formed, or kept raw so one bad fill cannot fail
/// the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaintValue {
    /// `{ type, opacity, color }`
    Entry(PaintEntry),
    /// Anything else (missing `type`, non-numeric `opacity`, ...)
    Malformed(serde_yaml_ng::Value),
}

impl PaintValue {
    /// The parsed fill, if well-formed.
    #[must_use]
    pub const fn entry(&self) -> Option<&PaintEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Malformed(_) => None,
        }
    }

    fn to_paint(&self, field: &str) -> Result<Paint, ParseError> {
        match self {
            Self::Entry(entry) => entry.to_paint(field),
            Self::Malformed(_) => Err(ParseError::InvalidValue {
                field: field.to_string(),
                message: "expected a paint with a `type`, a numeric `opacity` and an optional `color`"
                    .to_string(),
            }),
        }
    }
}

/// One fill as written in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintEntry {
    /// Paint kind
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    /// Opacity
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
}

const fn default_opacity() -> f64 {
    1.0
}

/// Color as written in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// `#rrggbb`
    Hex(String),
    /// `{ r, g, b }` with unit channels
    Channels(Color),
    /// Anything else; rejected per style instead of failing the document
    Malformed(serde_yaml_ng::Value),
}

impl ColorValue {
    fn resolve(&self, field: &str) -> Result<Color, ParseError> {
        match self {
            Self::Hex(hex) => Color::from_hex(hex).map_err(|e| ParseError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            }),
            Self::Channels(color) => Ok(*color),
            Self::Malformed(_) => Err(ParseError::InvalidValue {
                field: field.to_string(),
                message: "expected numeric {r, g, b} channels or a #rrggbb string".to_string(),
            }),
        }
    }
}

impl PaintEntry {
    fn to_paint(&self, field: &str) -> Result<Paint, ParseError> {
        let color = self
            .color
            .as_ref()
            .map(|c| c.resolve(&format!("{field}.color")))
            .transpose()?;
        Ok(Paint {
            paint_type: self.paint_type,
            opacity: self.opacity,
            color,
        })
    }
}

impl StyleEntry {
    // Only the first fill decides qualification, so only it can reject the
    // style. Unreadable later fills are dropped.
    fn to_paint_style(&self, index: usize) -> Result<PaintStyle, ParseError> {
        let mut paints = Vec::with_capacity(self.paints.len());
        for (j, paint) in self.paints.iter().enumerate() {
            match paint.to_paint(&format!("styles[{index}].paints[{j}]")) {
                Ok(paint) => paints.push(paint),
                Err(error) if j == 0 => return Err(error),
                Err(error) => {
                    tracing::debug!(style = %self.name, %error, "dropping unreadable fill");
                }
            }
        }
        Ok(PaintStyle::new(self.name.clone(), paints))
    }
}

/// A style entry that could not be converted.
#[derive(Debug)]
pub struct RejectedStyle {
    /// Style name
    pub name: String,
    /// Why it was rejected
    pub error: ParseError,
}

/// Styles converted from a document.
#[derive(Debug, Default)]
pub struct LoadedStyles {
    /// Converted styles, in document order
    pub styles: Vec<PaintStyle>,
    /// Entries with unreadable colors
    pub rejected: Vec<RejectedStyle>,
}

impl StyleDocument {
    /// Parse a document from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a document from JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize document to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Read a document from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let document = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            styles = document.styles.len(),
            "loaded style document"
        );
        Ok(document)
    }

    /// Convert entries into paint styles.
    ///
    /// An entry with an unreadable color is moved to
    /// [`LoadedStyles::rejected`]; the rest of the document still loads.
    #[must_use]
    pub fn into_styles(self) -> LoadedStyles {
        let mut loaded = LoadedStyles::default();
        for (index, entry) in self.styles.into_iter().enumerate() {
            match entry.to_paint_style(index) {
                Ok(style) => loaded.styles.push(style),
                Err(error) => {
                    tracing::warn!(style = %entry.name, %error, "rejecting style");
                    loaded.rejected.push(RejectedStyle {
                        name: entry.name,
                        error,
                    });
                }
            }
        }
        loaded
    }
}
