//! Turning accepted pairs into a swatch scene.

use crate::geometry::Size;
use crate::node::{Ellipse, Frame, LayoutDirection, Node, Stroke};
use accessible_pairs_core::{ColorPair, PairSet, Rgb255};
use serde::{Deserialize, Serialize};

/// Name of the root frame.
pub const ROOT_FRAME_NAME: &str = "Accessible Pairs";
/// Name of each pair frame.
pub const PAIR_FRAME_NAME: &str = "Pair";
/// Name of each swatch.
pub const SWATCH_NAME: &str = "Color";

const WHITE: Rgb255 = Rgb255::new(255, 255, 255);

/// Swatch scene settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Root frame padding
    pub padding: f32,
    /// Gap between pair rows
    pub item_spacing: f32,
    /// Root frame corner radius
    pub corner_radius: f32,
    /// Swatch diameter
    pub swatch_size: f32,
    /// Gap between the two swatches of a pair (negative overlaps)
    pub swatch_spacing: f32,
    /// Swatch outline width
    pub stroke_weight: f32,
    /// Swatch outline color
    pub stroke_color: Rgb255,
    /// Frame background
    pub background: Rgb255,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 24.0,
            item_spacing: 24.0,
            corner_radius: 24.0,
            swatch_size: 24.0,
            swatch_spacing: -4.0,
            stroke_weight: 2.0,
            stroke_color: WHITE,
            background: WHITE,
        }
    }
}

/// Output surface for accepted pairs.
///
/// Implementations consume the finished [`PairSet`]; scoring never waits
/// on rendering.
pub trait PairRenderer {
    /// What the renderer produces.
    type Output;

    /// Render every pair in order.
    fn render(&mut self, pairs: &PairSet) -> Self::Output;
}

/// Builds the "Accessible Pairs" frame tree.
#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    config: RenderConfig,
}

impl SceneRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn swatch(&self, fill: Rgb255) -> Ellipse {
        Ellipse {
            name: SWATCH_NAME.to_string(),
            size: Size::square(self.config.swatch_size),
            fill,
            stroke: Some(Stroke {
                color: self.config.stroke_color,
                weight: self.config.stroke_weight,
            }),
        }
    }

    fn pair_frame(&self, pair: &ColorPair) -> Frame {
        let mut frame = Frame::new(PAIR_FRAME_NAME, LayoutDirection::Horizontal);
        frame.description = Some(format!(
            "{} / {}: {}",
            pair.first.name, pair.second.name, pair.contrast
        ));
        frame.item_spacing = self.config.swatch_spacing;
        frame.fill = Some(self.config.background);
        frame.append_child(self.swatch(pair.first.rgb));
        frame.append_child(self.swatch(pair.second.rgb));
        frame
    }
}

impl PairRenderer for SceneRenderer {
    type Output = Node;

    fn render(&mut self, pairs: &PairSet) -> Node {
        let mut root = Frame::new(ROOT_FRAME_NAME, LayoutDirection::Vertical);
        root.padding = self.config.padding;
        root.item_spacing = self.config.item_spacing;
        root.corner_radius = self.config.corner_radius;
        root.fill = Some(self.config.background);

        for pair in pairs {
            root.append_child(self.pair_frame(pair));
        }
        tracing::debug!(pairs = pairs.len(), "built swatch scene");
        Node::Frame(root)
    }
}
