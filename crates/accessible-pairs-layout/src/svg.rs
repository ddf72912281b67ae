//! SVG export of a laid-out scene.

use crate::auto_layout::{BoxPaint, LayoutBox};
use std::fmt::Write;

/// Serialize a laid-out scene as a standalone SVG document.
///
/// Frames become `<g>` groups with a background `<rect>`; names and
/// descriptions are kept as `id`/`<title>` metadata and never drawn.
#[must_use]
pub fn to_svg(root: &LayoutBox) -> String {
    let width = root.rect.x + root.rect.width;
    let height = root.rect.y + root.rect.height;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
viewBox=\"0 0 {width} {height}\">\n"
    );
    write_box(&mut out, root, 1);
    out.push_str("</svg>\n");
    out
}

fn write_box(out: &mut String, node: &LayoutBox, depth: usize) {
    let indent = "  ".repeat(depth);
    let r = &node.rect;
    // Writing into a String cannot fail.
    match &node.paint {
        BoxPaint::Frame {
            fill,
            corner_radius,
        } => {
            let _ = writeln!(out, "{indent}<g data-name=\"{}\">", escape(&node.name));
            if let Some(description) = &node.description {
                let _ = writeln!(out, "{indent}  <title>{}</title>", escape(description));
            }
            if let Some(fill) = fill {
                let _ = writeln!(
                    out,
                    "{indent}  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{corner_radius}\" fill=\"{}\"/>",
                    r.x,
                    r.y,
                    r.width,
                    r.height,
                    fill.to_hex()
                );
            }
            for child in &node.children {
                write_box(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</g>");
        }
        BoxPaint::Ellipse { fill, stroke } => {
            let c = r.center();
            let stroke_attrs = stroke.map_or_else(String::new, |s| {
                format!(
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    s.color.to_hex(),
                    s.weight
                )
            });
            let _ = writeln!(
                out,
                "{indent}<ellipse data-name=\"{}\" cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\"{stroke_attrs}/>",
                escape(&node.name),
                c.x,
                c.y,
                r.width / 2.0,
                r.height / 2.0,
                fill.to_hex()
            );
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
