//! Swatch scene, auto-layout and SVG export for accessible color pairs.
//!
//! Rendering is a consumer of [`accessible_pairs_core::PairSet`]: the
//! [`PairRenderer`] trait is the seam, [`SceneRenderer`] builds the
//! "Accessible Pairs" frame tree, [`layout`] positions it and [`to_svg`]
//! serializes the result.

mod auto_layout;
mod geometry;
mod node;
mod render;
mod svg;

pub use auto_layout::{layout, measure, BoxPaint, LayoutBox};
pub use geometry::{Point, Rect, Size};
pub use node::{Ellipse, Frame, LayoutDirection, Node, Stroke};
pub use render::{
    PairRenderer, RenderConfig, SceneRenderer, PAIR_FRAME_NAME, ROOT_FRAME_NAME, SWATCH_NAME,
};
pub use svg::to_svg;

use accessible_pairs_core::PairSet;

/// Build, lay out and serialize the swatch frame for `pairs`.
#[must_use]
pub fn render_svg(pairs: &PairSet, config: RenderConfig) -> String {
    let scene = SceneRenderer::new(config).render(pairs);
    to_svg(&layout(&scene, Point::ORIGIN))
}
