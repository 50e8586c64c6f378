// File: crates/chart-core/src/pie.rs
// Summary: Pie/donut slice geometry: animated sweep angles, arc paths and label anchors.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::Point;
use crate::path::PathDescriptor;
use crate::series::Series;

/// Slices start at 12 o'clock.
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// Labels sit at this fraction of the radius.
pub const LABEL_RADIUS_FACTOR: f64 = 0.7;

const FULL_TURN_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    /// Zero for a pie, positive for a donut.
    pub inner_radius: f64,
    /// Slices whose share is below this percentage get no label.
    pub min_label_pct: f64,
}

impl PieLayout {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius: radius.max(0.0), inner_radius: 0.0, min_label_pct: 8.0 }
    }

    pub fn donut(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius.clamp(0.0, self.radius);
        self
    }

    pub fn with_min_label_pct(mut self, pct: f64) -> Self {
        self.min_label_pct = pct;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total in percent, independent of animation progress.
    pub percentage: f64,
    /// Set when the animated sweep exceeds half a turn.
    pub large_arc: bool,
    pub path: PathDescriptor,
    pub label_position: Option<Point>,
}

impl PieSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Slices laid end to end from 12 o'clock, each sweeping
/// `value / total * 2π * progress`. Negative values count as zero and a zero
/// total is floored to 1 so every slice collapses instead of dividing by zero.
pub fn pie_slices(series: &Series, layout: &PieLayout, progress: f64) -> Vec<PieSlice> {
    let progress = progress.clamp(0.0, 1.0);
    let total = series.values().map(|v| v.max(0.0)).sum::<f64>();
    let total = if total > 0.0 { total } else { 1.0 };

    let mut start = START_ANGLE;
    let mut slices = Vec::with_capacity(series.len());
    for (index, value) in series.values().enumerate() {
        let fraction = value.max(0.0) / total;
        let span = fraction * TAU * progress;
        let end = start + span;
        let percentage = fraction * 100.0;
        let label_position = (percentage >= layout.min_label_pct).then(|| {
            let mid = start + span * 0.5;
            let r = if layout.inner_radius > 0.0 {
                (layout.inner_radius + layout.radius) * 0.5
            } else {
                layout.radius * LABEL_RADIUS_FACTOR
            };
            layout.center.polar(r, mid)
        });
        slices.push(PieSlice {
            index,
            start_angle: start,
            end_angle: end,
            percentage,
            large_arc: span > PI,
            path: slice_path(layout, start, end),
            label_position,
        });
        start = end;
    }
    slices
}

/// `M center L arcStart A r r 0 large 1 arcEnd Z` for a pie; ring segment for a donut.
pub fn slice_path(layout: &PieLayout, start: f64, end: f64) -> PathDescriptor {
    let c = layout.center;
    let mut path = PathDescriptor::new();
    if layout.inner_radius > 0.0 {
        path.move_to(c.polar(layout.radius, start));
        push_arc(&mut path, c, layout.radius, start, end, true);
        path.line_to(c.polar(layout.inner_radius, end));
        push_arc(&mut path, c, layout.inner_radius, end, start, false);
    } else {
        path.move_to(c).line_to(c.polar(layout.radius, start));
        push_arc(&mut path, c, layout.radius, start, end, true);
    }
    path.close();
    path
}

// A single SVG arc whose endpoints coincide draws nothing, so a full turn is
// split into two half arcs.
fn push_arc(path: &mut PathDescriptor, c: Point, r: f64, from: f64, to: f64, sweep: bool) {
    let span = (to - from).abs();
    if span >= TAU - FULL_TURN_EPS {
        let mid = (from + to) * 0.5;
        path.arc_to(r, false, sweep, c.polar(r, mid));
        path.arc_to(r, false, sweep, c.polar(r, to));
    } else {
        path.arc_to(r, span > PI, sweep, c.polar(r, to));
    }
}

/// Normalize an angle into `[START_ANGLE, START_ANGLE + 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    (angle - START_ANGLE).rem_euclid(TAU) + START_ANGLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    fn layout() -> PieLayout {
        PieLayout::new(Point::new(100.0, 100.0), 80.0)
    }

    #[test]
    fn first_slice_starts_at_twelve() {
        let s = Series::from_pairs([("a", 1.0), ("b", 3.0)]);
        let slices = pie_slices(&s, &layout(), 1.0);
        assert_eq!(slices[0].path.to_string().split(" A").next().unwrap(), "M 100 100 L 100 20");
        assert!((slices[0].span() - TAU * 0.25).abs() < 1e-9);
        assert!(slices[1].large_arc);
        assert!(!slices[0].large_arc);
    }

    #[test]
    fn zero_total_collapses_slices() {
        let s = Series::from_pairs([("a", 0.0), ("b", 0.0)]);
        let slices = pie_slices(&s, &layout(), 1.0);
        assert!(slices.iter().all(|sl| sl.span() == 0.0 && sl.label_position.is_none()));
    }

    #[test]
    fn full_circle_is_two_half_arcs() {
        let s = Series::from_pairs([("only", 5.0)]);
        let slices = pie_slices(&s, &layout(), 1.0);
        let arcs = slices[0]
            .path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::Arc { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert!(slices[0].large_arc);
    }

    #[test]
    fn thin_slices_have_no_label() {
        let s = Series::from_pairs([("big", 95.0), ("thin", 5.0)]);
        let slices = pie_slices(&s, &layout(), 1.0);
        assert!(slices[0].label_position.is_some());
        assert!(slices[1].label_position.is_none());
    }

    #[test]
    fn label_sits_at_seventy_percent_radius() {
        let s = Series::from_pairs([("a", 1.0), ("b", 1.0)]);
        let slices = pie_slices(&s, &layout(), 1.0);
        let p = slices[0].label_position.unwrap();
        // midpoint of the right half is 3 o'clock
        assert!((p.x - 156.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn donut_path_returns_along_inner_ring() {
        let s = Series::from_pairs([("a", 1.0), ("b", 1.0)]);
        let slices = pie_slices(&s, &layout().donut(40.0), 1.0);
        let cmds = slices[0].path.commands();
        assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
        assert!(matches!(cmds[3], PathCommand::Arc { sweep: false, .. }));
    }

    #[test]
    fn normalize_wraps_into_turn() {
        assert!((normalize_angle(START_ANGLE + TAU + 0.5) - (START_ANGLE + 0.5)).abs() < 1e-9);
    }
}
