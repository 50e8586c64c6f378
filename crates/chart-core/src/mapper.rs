// File: crates/chart-core/src/mapper.rs
// Summary: Geometry mapper; turns a series into plot coordinates for line and bar charts.

use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::scale::{BandScale, IndexScale, LinearScale};
use crate::series::Series;
use crate::types::{Insets, Size};

/// Scales used to place a line series; kept so hover and axes agree with the points.
#[derive(Clone, Copy, Debug)]
pub struct LineLayout {
    pub x: IndexScale,
    pub y: LinearScale,
    pub plot: RectF,
}

impl LineLayout {
    pub fn new(series: &Series, size: Size, insets: Insets) -> Result<Self> {
        let (min, max) = series.value_range().ok_or(ChartError::Empty)?;
        let plot = insets.plot_rect(size);
        // spans under 1 are floored to 1; an all-equal series keeps its zero
        // span so it lands on the midline
        let top = if max > min { min + (max - min).max(1.0) } else { max };
        Ok(Self {
            x: IndexScale::new(plot.left, plot.right, series.len()),
            y: LinearScale::vertical(min, top, plot.top, plot.bottom),
            plot,
        })
    }

    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x.to_px(index), self.y.to_px(value))
    }

    /// Screen-space baseline the area fill closes onto.
    pub fn baseline(&self) -> f64 {
        self.plot.bottom
    }
}

/// One `(x, y)` per series point: x spread by index across the plot, y by
/// value between the series minimum (bottom) and maximum (top).
pub fn map_line(series: &Series, size: Size, insets: Insets) -> Result<Vec<Point>> {
    let layout = LineLayout::new(series, size, insets)?;
    Ok(series
        .values()
        .enumerate()
        .map(|(i, v)| layout.point(i, v))
        .collect())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    /// Bar rectangle at the current reveal progress.
    pub rect: RectF,
    /// Height the bar reaches when fully revealed.
    pub full_height: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct BarLayout {
    pub bands: BandScale,
    pub max_value: f64,
    pub plot: RectF,
}

impl BarLayout {
    pub fn new(series: &Series, size: Size, insets: Insets, bar_padding: f64) -> Result<Self> {
        if series.is_empty() {
            return Err(ChartError::Empty);
        }
        let plot = insets.plot_rect(size);
        let max_value = series.values().fold(f64::NEG_INFINITY, f64::max).max(1.0);
        Ok(Self {
            bands: BandScale::new(plot.left, plot.right, series.len(), bar_padding),
            max_value,
            plot,
        })
    }

    pub fn full_height(&self, value: f64) -> f64 {
        (value.max(0.0) / self.max_value) * self.plot.height()
    }

    pub fn bar(&self, index: usize, value: f64, progress: f64) -> BarGeometry {
        let full_height = self.full_height(value);
        let h = full_height * progress.clamp(0.0, 1.0);
        let left = self.bands.band_start(index);
        BarGeometry {
            index,
            rect: RectF::from_ltrb(left, self.plot.bottom - h, left + self.bands.band_width(), self.plot.bottom),
            full_height,
        }
    }
}

/// Bars in equal slots, heights proportional to `value / max_value` scaled by
/// reveal `progress`. `max_value` is floored to 1 and negatives draw at zero height.
pub fn map_bars(
    series: &Series,
    size: Size,
    insets: Insets,
    bar_padding: f64,
    progress: f64,
) -> Result<Vec<BarGeometry>> {
    let layout = BarLayout::new(series, size, insets, bar_padding)?;
    Ok(series
        .values()
        .enumerate()
        .map(|(i, v)| layout.bar(i, v, progress))
        .collect())
}
