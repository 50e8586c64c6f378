// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral drawable primitives produced by the chart renderers.

use crate::geometry::{Point, RectF};
use crate::path::PathDescriptor;
use crate::theme::Rgba;
use crate::types::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        rect: RectF,
        corner_radius: f64,
        fill: Rgba,
        /// Geometry depends on reveal progress.
        animated: bool,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba,
        stroke: Option<(Rgba, f64)>,
    },
    Path {
        path: PathDescriptor,
        fill: Option<Rgba>,
        stroke: Option<(Rgba, f64)>,
        animated: bool,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Rgba,
        width: f64,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        anchor: TextAnchor,
        fill: Rgba,
        bold: bool,
    },
}

impl Primitive {
    pub fn text(position: Point, content: impl Into<String>, size: f64, anchor: TextAnchor, fill: Rgba) -> Self {
        Primitive::Text { position, content: content.into(), size, anchor, fill, bold: false }
    }
}

/// Everything one chart draws, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: Size,
    pub background: Rgba,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(size: Size, background: Rgba) -> Self {
        Self { size, background, primitives: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Text contents in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Rectangles flagged as animated (bars), in draw order.
    pub fn animated_rects(&self) -> impl Iterator<Item = &RectF> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect { rect, animated: true, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathDescriptor> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}
