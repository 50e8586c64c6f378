// File: crates/chart-core/src/hover.rs
// Summary: Hover index state, pointer hit testing and tooltip layout.

use std::f64::consts::TAU;

use crate::geometry::{clamp, Point, RectF};
use crate::mapper::BarGeometry;
use crate::pie::{normalize_angle, PieLayout, PieSlice};
use crate::series::{Series, SeriesPoint};
use crate::text::{estimate_width, format_value};
use crate::types::Size;

/// Currently hovered data point, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self { index: Some(index) }
    }

    pub fn enter(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn leave(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Index into `series`, re-validated: a stale index from a previous data
    /// set resolves to `None` rather than a wrong or missing point.
    pub fn valid_index(&self, series: &Series) -> Option<usize> {
        self.index.filter(|&i| i < series.len())
    }

    pub fn resolve<'a>(&self, series: &'a Series) -> Option<&'a SeriesPoint> {
        self.valid_index(series).and_then(|i| series.get(i))
    }
}

/// Bar whose full slot column contains `p` (hovering above a short bar still counts).
pub fn hit_test_bars(bars: &[BarGeometry], plot: RectF, p: Point) -> Option<usize> {
    if p.y < plot.top || p.y > plot.bottom {
        return None;
    }
    bars.iter()
        .find(|b| p.x >= b.rect.left && p.x <= b.rect.right)
        .map(|b| b.index)
}

/// Nearest point within `radius` pixels.
pub fn nearest_point(points: &[Point], p: Point, radius: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, q)| (i, q.distance(p)))
        .filter(|&(_, d)| d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Slice under `p`, by distance from the centre and angle from 12 o'clock.
pub fn hit_test_slices(slices: &[PieSlice], layout: &PieLayout, p: Point) -> Option<usize> {
    let d = layout.center.distance(p);
    if d > layout.radius || d < layout.inner_radius {
        return None;
    }
    let angle = normalize_angle((p.y - layout.center.y).atan2(p.x - layout.center.x));
    slices
        .iter()
        .find(|s| {
            let span = s.span();
            span > 0.0 && (span >= TAU || (angle >= s.start_angle && angle < s.end_angle))
        })
        .map(|s| s.index)
}

/// Tooltip box: title plus value lines, placed above its anchor and kept inside the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    pub anchor: Point,
    pub title: String,
    pub lines: Vec<String>,
    pub rect: RectF,
}

impl Tooltip {
    pub const PADDING: f64 = 8.0;
    pub const LINE_HEIGHT: f64 = 16.0;
    const OFFSET: f64 = 10.0;

    pub fn new(index: usize, point: &SeriesPoint, anchor: Point, canvas: Size, font_size: f64) -> Self {
        let mut lines = vec![format_value(point.value)];
        if let Some(secondary) = point.secondary {
            lines.push(format_value(secondary));
        }
        Self::with_lines(index, point.label.clone(), lines, anchor, canvas, font_size)
    }

    pub fn with_lines(
        index: usize,
        title: String,
        lines: Vec<String>,
        anchor: Point,
        canvas: Size,
        font_size: f64,
    ) -> Self {
        let widest = std::iter::once(&title)
            .chain(lines.iter())
            .map(|l| estimate_width(l, font_size))
            .fold(0.0, f64::max);
        let w = widest + Self::PADDING * 2.0;
        let h = (lines.len() + 1) as f64 * Self::LINE_HEIGHT + Self::PADDING;
        let left = clamp(anchor.x - w * 0.5, 0.0, (canvas.width - w).max(0.0));
        let mut top = anchor.y - h - Self::OFFSET;
        if top < 0.0 {
            // no room above: flip below the anchor
            top = anchor.y + Self::OFFSET;
        }
        let top = clamp(top, 0.0, (canvas.height - h).max(0.0));
        Self { index, anchor, title, lines, rect: RectF::from_ltwh(left, top, w, h) }
    }
}
