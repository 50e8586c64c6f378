// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: data validation state, rendering dispatch, hit testing and SVG output.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::animation::RevealDriver;
use crate::config::ChartOptions;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::hover::{hit_test_bars, hit_test_slices, nearest_point, HoverState, Tooltip};
use crate::mapper::{map_bars, map_line, BarLayout};
use crate::path::revealed_count;
use crate::pie::pie_slices;
use crate::render::{self, placeholder, EMPTY_MESSAGE, INVALID_MESSAGE};
use crate::scene::Scene;
use crate::series::Series;
use crate::svg::to_svg;
use crate::theme::Theme;

/// Pointer distance (px) within which a line marker counts as hovered.
pub const LINE_HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// What a chart was given: a usable series, or the reason normalization rejected it.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Series(Series),
    Invalid(String),
}

/// Result of one render pass. Failure states are placeholders, never errors.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    Scene(Scene),
    Empty(Scene),
    Invalid(Scene),
}

impl Rendered {
    pub fn scene(&self) -> &Scene {
        match self {
            Rendered::Scene(s) | Rendered::Empty(s) | Rendered::Invalid(s) => s,
        }
    }

    pub fn into_scene(self) -> Scene {
        match self {
            Rendered::Scene(s) | Rendered::Empty(s) | Rendered::Invalid(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::Empty(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Rendered::Invalid(_))
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    pub theme: Theme,
}

impl Chart {
    pub fn new(kind: ChartKind, series: Series) -> Self {
        let options = ChartOptions::default();
        let theme = options.theme.theme();
        Self { kind, data: ChartData::Series(series), options, theme }
    }

    /// Normalize records; an `InvalidData` rejection becomes the invalid state
    /// rather than an error so every chart kind shows the same placeholder.
    pub fn from_records(kind: ChartKind, records: &[Value]) -> Result<Self> {
        match Series::from_records(records) {
            Ok(series) => Ok(Self::new(kind, series)),
            Err(ChartError::InvalidData(reason)) => {
                let mut chart = Self::new(kind, Series::empty());
                chart.data = ChartData::Invalid(reason);
                Ok(chart)
            }
            Err(e) => Err(e),
        }
    }

    /// Apply options; the theme follows `options.theme`.
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.theme = options.theme.theme();
        self.options = options;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn series(&self) -> Option<&Series> {
        match &self.data {
            ChartData::Series(s) => Some(s),
            ChartData::Invalid(_) => None,
        }
    }

    pub fn set_series(&mut self, series: Series) {
        self.data = ChartData::Series(series);
    }

    /// Reveal driver with this chart kind's delay and transition.
    pub fn reveal_driver(&self) -> RevealDriver {
        self.options.reveal.driver_for(self.kind)
    }

    pub fn render(&self, progress: f64, hover: &HoverState) -> Rendered {
        let series = match &self.data {
            ChartData::Invalid(_) => return Rendered::Invalid(placeholder(INVALID_MESSAGE, &self.options, &self.theme)),
            ChartData::Series(s) if s.is_empty() => {
                return Rendered::Empty(placeholder(EMPTY_MESSAGE, &self.options, &self.theme))
            }
            ChartData::Series(s) => s,
        };
        let progress = progress.clamp(0.0, 1.0);
        let scene = match self.kind {
            ChartKind::Bar => render::render_bar(series, &self.options, &self.theme, progress, hover),
            ChartKind::Line => render::render_line(series, &self.options, &self.theme, progress, hover),
            ChartKind::Pie => render::render_pie(series, &self.options, &self.theme, progress, hover),
        };
        Rendered::Scene(scene)
    }

    /// Tooltip for the hovered point, if the index is still valid.
    pub fn tooltip(&self, progress: f64, hover: &HoverState) -> Option<Tooltip> {
        let series = self.series()?;
        match self.kind {
            ChartKind::Bar => render::bar_tooltip(series, &self.options, progress, hover),
            ChartKind::Line => render::line_tooltip(series, &self.options, hover),
            ChartKind::Pie => render::pie_tooltip(series, &self.options, progress, hover),
        }
    }

    /// Index of the data point under a pointer position.
    pub fn hit_test(&self, pointer: Point, progress: f64) -> Option<usize> {
        let series = self.series().filter(|s| !s.is_empty())?;
        let opts = &self.options;
        match self.kind {
            ChartKind::Bar => {
                let layout = BarLayout::new(series, opts.size, opts.insets, opts.bar_padding).ok()?;
                let bars = map_bars(series, opts.size, opts.insets, opts.bar_padding, 1.0).ok()?;
                hit_test_bars(&bars, layout.plot, pointer)
            }
            ChartKind::Line => {
                let points = map_line(series, opts.size, opts.insets).ok()?;
                let shown = revealed_count(points.len(), progress);
                nearest_point(&points[..shown], pointer, LINE_HIT_RADIUS)
            }
            ChartKind::Pie => {
                let layout = render::pie_layout(opts);
                let slices = pie_slices(series, &layout, progress);
                hit_test_slices(&slices, &layout, pointer)
            }
        }
    }

    pub fn to_svg_string(&self, progress: f64, hover: &HoverState) -> String {
        to_svg(self.render(progress, hover).scene(), self.options.css_transitions)
    }

    /// Render to an SVG file at `path`, creating parent directories.
    pub fn render_to_svg(&self, progress: f64, hover: &HoverState, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string(progress, hover))?;
        tracing::debug!(path = %path.display(), kind = ?self.kind, "wrote svg");
        Ok(())
    }
}
