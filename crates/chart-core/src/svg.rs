// File: crates/chart-core/src/svg.rs
// Summary: Serialize a Scene as a standalone SVG document.

use std::fmt::Write as _;

use crate::path::num;
use crate::scene::{Primitive, Scene, TextAnchor};
use crate::text::escape_xml;
use crate::theme::Rgba;

const TRANSITION_STYLE: &str = "transition: all 0.8s ease-out";

fn paint(attr: &str, color: Rgba) -> String {
    if color.is_opaque() {
        format!(r#"{attr}="{}""#, color.hex())
    } else {
        format!(r#"{attr}="{}" {attr}-opacity="{}""#, color.hex(), num(color.opacity()))
    }
}

fn stroke_attrs(stroke: Option<(Rgba, f64)>) -> String {
    match stroke {
        Some((color, width)) => format!(r#" {} stroke-width="{}""#, paint("stroke", color), num(width)),
        None => String::new(),
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// One element per primitive, in draw order. Animated geometry carries a CSS
/// transition when `transitions` is set so browsers ease between progress steps.
pub fn to_svg(scene: &Scene, transitions: bool) -> String {
    let w = num(scene.size.width);
    let h = num(scene.size.height);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if scene.background.a > 0 {
        let _ = writeln!(out, r#"  <rect width="100%" height="100%" {}/>"#, paint("fill", scene.background));
    }
    let style = |animated: bool| {
        if animated && transitions {
            format!(r#" style="{TRANSITION_STYLE}""#)
        } else {
            String::new()
        }
    };

    for p in &scene.primitives {
        let _ = match p {
            Primitive::Rect { rect, corner_radius, fill, animated } => writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" {}{}/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width().max(0.0)),
                num(rect.height().max(0.0)),
                num(*corner_radius),
                paint("fill", *fill),
                style(*animated)
            ),
            Primitive::Circle { center, radius, fill, stroke } => writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" {}{}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                paint("fill", *fill),
                stroke_attrs(*stroke)
            ),
            Primitive::Path { path, fill, stroke, animated } => {
                let fill = match fill {
                    Some(c) => paint("fill", *c),
                    None => r#"fill="none""#.to_string(),
                };
                writeln!(
                    out,
                    r#"  <path d="{}" {}{}{}/>"#,
                    path,
                    fill,
                    stroke_attrs(*stroke),
                    style(*animated)
                )
            }
            Primitive::Line { from, to, stroke, width } => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke_attrs(Some((*stroke, *width)))
            ),
            Primitive::Text { position, content, size, anchor, fill, bold } => writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="{}" {}{}>{}</text>"#,
                num(position.x),
                num(position.y),
                num(*size),
                anchor_attr(*anchor),
                paint("fill", *fill),
                if *bold { r#" font-weight="600""# } else { "" },
                escape_xml(content)
            ),
        };
    }
    out.push_str("</svg>\n");
    out
}
