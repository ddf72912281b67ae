//! Scene nodes: auto-layout frames and swatch ellipses.

use crate::geometry::Size;
use accessible_pairs_core::Rgb255;
use serde::{Deserialize, Serialize};

/// Main axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    /// Children left to right
    Horizontal,
    /// Children top to bottom
    #[default]
    Vertical,
}

/// Stroke around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color
    pub color: Rgb255,
    /// Stroke width in pixels
    pub weight: f32,
}

/// Auto-layout container sized to hug its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Layer name
    pub name: String,
    /// Optional tooltip-style description (not drawn)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Main axis
    pub direction: LayoutDirection,
    /// Inner padding on every side
    pub padding: f32,
    /// Gap between children; negative values overlap them
    pub item_spacing: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Background
    pub fill: Option<Rgb255>,
    /// Children in layout order
    pub children: Vec<Node>,
}

impl Frame {
    /// Empty frame with no padding, spacing or fill.
    #[must_use]
    pub fn new(name: impl Into<String>, direction: LayoutDirection) -> Self {
        Self {
            name: name.into(),
            description: None,
            direction,
            padding: 0.0,
            item_spacing: 0.0,
            corner_radius: 0.0,
            fill: None,
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }
}

/// Filled ellipse inscribed in `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Layer name
    pub name: String,
    /// Bounding size
    pub size: Size,
    /// Fill color
    pub fill: Rgb255,
    /// Outline
    pub stroke: Option<Stroke>,
}

/// Any node of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Node {
    /// Container
    Frame(Frame),
    /// Swatch
    Ellipse(Ellipse),
}

impl Node {
    /// Layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Frame(f) => &f.name,
            Self::Ellipse(e) => &e.name,
        }
    }

    /// Children, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Frame(f) => &f.children,
            Self::Ellipse(_) => &[],
        }
    }
}

impl From<Frame> for Node {
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}

impl From<Ellipse> for Node {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}
