//! Hug-contents auto-layout.
//!
//! Frames shrink to fit their children: along the main axis the size is
//! padding on both ends plus every child plus `item_spacing` between
//! neighbours; across it, padding plus the largest child. Children are
//! aligned to the start of the cross axis.

use crate::geometry::{Point, Rect, Size};
use crate::node::{Frame, LayoutDirection, Node, Stroke};
use accessible_pairs_core::Rgb255;
use serde::{Deserialize, Serialize};

/// Paint information carried by a positioned box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BoxPaint {
    /// Rounded rectangle background
    Frame {
        /// Background
        fill: Option<Rgb255>,
        /// Corner radius
        corner_radius: f32,
    },
    /// Ellipse inscribed in the box
    Ellipse {
        /// Fill
        fill: Rgb255,
        /// Outline
        stroke: Option<Stroke>,
    },
}

/// A node with its absolute bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    /// Layer name
    pub name: String,
    /// Description copied from the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Absolute bounds
    pub rect: Rect,
    /// How to paint it
    pub paint: BoxPaint,
    /// Positioned children
    pub children: Vec<LayoutBox>,
}

/// Intrinsic size of a node.
#[must_use]
pub fn measure(node: &Node) -> Size {
    match node {
        Node::Ellipse(e) => e.size,
        Node::Frame(f) => measure_frame(f),
    }
}

fn measure_frame(frame: &Frame) -> Size {
    let sizes: Vec<Size> = frame.children.iter().map(measure).collect();
    let gaps = sizes.len().saturating_sub(1) as f32 * frame.item_spacing;
    let inset = frame.padding * 2.0;

    let (main, cross) = sizes.iter().fold((0.0_f32, 0.0_f32), |(main, cross), s| {
        let (m, c) = split(frame.direction, *s);
        (main + m, cross.max(c))
    });

    join(frame.direction, inset + main + gaps, inset + cross)
}

/// Lay out `node` with its top-left corner at `origin`.
#[must_use]
pub fn layout(node: &Node, origin: Point) -> LayoutBox {
    let rect = Rect::new(origin, measure(node));
    match node {
        Node::Ellipse(e) => LayoutBox {
            name: node.name().to_string(),
            description: None,
            rect,
            paint: BoxPaint::Ellipse {
                fill: e.fill,
                stroke: e.stroke,
            },
            children: Vec::new(),
        },
        Node::Frame(f) => {
            let mut cursor = f.padding;
            let mut children = Vec::with_capacity(f.children.len());
            for child in &f.children {
                let (main, cross) = (cursor, f.padding);
                let offset = match f.direction {
                    LayoutDirection::Horizontal => Point::new(origin.x + main, origin.y + cross),
                    LayoutDirection::Vertical => Point::new(origin.x + cross, origin.y + main),
                };
                let placed = layout(child, offset);
                cursor += split(f.direction, placed.rect.size()).0 + f.item_spacing;
                children.push(placed);
            }
            LayoutBox {
                name: node.name().to_string(),
                description: f.description.clone(),
                rect,
                paint: BoxPaint::Frame {
                    fill: f.fill,
                    corner_radius: f.corner_radius,
                },
                children,
            }
        }
    }
}

// (main, cross) extent along `direction`.
const fn split(direction: LayoutDirection, size: Size) -> (f32, f32) {
    match direction {
        LayoutDirection::Horizontal => (size.width, size.height),
        LayoutDirection::Vertical => (size.height, size.width),
    }
}

const fn join(direction: LayoutDirection, main: f32, cross: f32) -> Size {
    match direction {
        LayoutDirection::Horizontal => Size::new(main, cross),
        LayoutDirection::Vertical => Size::new(cross, main),
    }
}
