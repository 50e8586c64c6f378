// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; chart geometry, path building, reveal animation, hover and SVG output.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod mapper;
pub mod path;
pub mod pie;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{Easing, RevealDriver, RevealState, Tween};
#[cfg(feature = "timer")]
pub use animation::RevealTimer;
pub use chart::{Chart, ChartData, ChartKind, Rendered};
pub use config::{ChartOptions, RevealOptions};
pub use error::{ChartError, Result};
pub use geometry::{Point, RectF};
pub use hover::{HoverState, Tooltip};
pub use mapper::{map_bars, map_line, BarGeometry};
pub use path::{area_path, line_path, PathCommand, PathDescriptor};
pub use pie::{pie_slices, PieLayout, PieSlice};
pub use scene::{Primitive, Scene, TextAnchor};
pub use series::{Series, SeriesId, SeriesPoint};
pub use svg::to_svg;
pub use theme::{Rgba, Theme, ThemeMode};
pub use types::{Insets, Size};
