// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, padding box).

use serde::Deserialize;

use crate::geometry::RectF;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 300.0;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Padding box around the plot area, in pixels. Negative sides (e.g. from a
/// hand-edited options file) are treated as zero when laying out the plot.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Copy with every side clamped at zero.
    pub fn non_negative(&self) -> Self {
        Self::new(self.left.max(0.0), self.right.max(0.0), self.top.max(0.0), self.bottom.max(0.0))
    }

    /// Drawable area inside `size`. Negative sides count as zero; width and
    /// height are clamped at zero when the padding is larger than the canvas.
    pub fn plot_rect(&self, size: Size) -> RectF {
        let i = self.non_negative();
        let w = (size.width - i.hsum()).max(0.0);
        let h = (size.height - i.vsum()).max(0.0);
        RectF::from_ltwh(i.left, i.top, w, h)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40.0, 20.0, 20.0, 40.0)
    }
}
