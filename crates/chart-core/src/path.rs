// File: crates/chart-core/src/path.rs
// Summary: Path descriptors (move/line/arc/close) and progressive line/area path builders.

use std::fmt;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc (SVG `A r r 0 large sweep x y`).
    Arc { radius: f64, large_arc: bool, sweep: bool, to: Point },
    Close,
}

/// An ordered command list; `Display` yields SVG path data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDescriptor {
    commands: Vec<PathCommand>,
}

impl PathDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> &mut Self {
        self.commands.push(PathCommand::Arc { radius, large_arc, sweep, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Points visited by move/line/arc commands, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Arc { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }
}

impl fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", num(p.x), num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", num(p.x), num(p.y))?,
                PathCommand::Arc { radius, large_arc, sweep, to } => write!(
                    f,
                    "A {r} {r} 0 {} {} {} {}",
                    large_arc as u8,
                    sweep as u8,
                    num(to.x),
                    num(to.y),
                    r = num(radius)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Format a coordinate with at most two decimals, trailing zeros trimmed.
pub fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Number of leading points shown at `progress`: every index `<= floor(n * progress)`.
pub fn revealed_count(n: usize, progress: f64) -> usize {
    if n == 0 {
        return 0;
    }
    let p = progress.clamp(0.0, 1.0);
    ((n as f64 * p).floor() as usize + 1).min(n)
}

/// Polyline through the revealed prefix of `points`.
pub fn line_path(points: &[Point], progress: f64) -> PathDescriptor {
    let mut path = PathDescriptor::new();
    let shown = &points[..revealed_count(points.len(), progress)];
    if let Some((first, rest)) = shown.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

/// Revealed polyline closed down onto `baseline` under its last and first x.
pub fn area_path(points: &[Point], baseline: f64, progress: f64) -> PathDescriptor {
    let mut path = line_path(points, progress);
    let shown = revealed_count(points.len(), progress);
    if shown == 0 {
        return path;
    }
    let first = points[0];
    let last = points[shown - 1];
    path.line_to(Point::new(last.x, baseline))
        .line_to(Point::new(first.x, baseline))
        .close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<Point> {
        vec![Point::new(0.0, 10.0), Point::new(10.0, 5.0), Point::new(20.0, 7.5), Point::new(30.0, 0.0)]
    }

    #[test]
    fn full_line_path() {
        assert_eq!(line_path(&pts(), 1.0).to_string(), "M 0 10 L 10 5 L 20 7.5 L 30 0");
    }

    #[test]
    fn partial_reveal_includes_floor_index() {
        // floor(4 * 0.5) = 2 -> indices 0..=2
        assert_eq!(line_path(&pts(), 0.5).commands().len(), 3);
        assert_eq!(line_path(&pts(), 0.0).to_string(), "M 0 10");
        assert!(line_path(&[], 1.0).is_empty());
    }

    #[test]
    fn area_closes_to_baseline() {
        let d = area_path(&pts()[..2], 20.0, 1.0).to_string();
        assert_eq!(d, "M 0 10 L 10 5 L 10 20 L 0 20 Z");
    }

    #[test]
    fn arc_formatting() {
        let mut p = PathDescriptor::new();
        p.move_to(Point::new(50.0, 50.0))
            .line_to(Point::new(50.0, 10.0))
            .arc_to(40.0, true, true, Point::new(10.004, 50.0))
            .close();
        assert_eq!(p.to_string(), "M 50 50 L 50 10 A 40 40 0 1 1 10 50 Z");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(1.005e-3), "0");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(3.10), "3.1");
    }
}
