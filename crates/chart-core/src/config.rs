// File: crates/chart-core/src/config.rs
// Summary: Chart options (layout, labels, reveal timing, theme) with TOML loading.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::animation::{Easing, RevealDriver};
use crate::chart::ChartKind;
use crate::error::{ChartError, Result};
use crate::theme::ThemeMode;
use crate::types::{Insets, Size};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub bar_delay_ms: u64,
    pub line_delay_ms: u64,
    pub pie_delay_ms: u64,
    /// Length of the eased transition after the flip; 0 disables it.
    pub transition_ms: u64,
    pub easing: Easing,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            bar_delay_ms: 100,
            line_delay_ms: 300,
            pie_delay_ms: 200,
            transition_ms: 800,
            easing: Easing::EaseOutCubic,
        }
    }
}

impl RevealOptions {
    pub fn delay_for(&self, kind: ChartKind) -> Duration {
        Duration::from_millis(match kind {
            ChartKind::Bar => self.bar_delay_ms,
            ChartKind::Line => self.line_delay_ms,
            ChartKind::Pie => self.pie_delay_ms,
        })
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn driver_for(&self, kind: ChartKind) -> RevealDriver {
        RevealDriver::new(self.delay_for(kind)).with_transition(self.transition(), self.easing)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub size: Size,
    pub insets: Insets,
    /// Fraction of each bar slot left empty.
    pub bar_padding: f64,
    pub corner_radius: f64,
    /// Bars shorter than this (fully revealed, in px) get no value label.
    pub min_label_height: f64,
    /// Pie slices below this share (percent) get no label.
    pub min_label_pct: f64,
    /// Inner radius as a fraction of the outer one; 0 draws a full pie.
    pub donut_ratio: f64,
    pub grid_lines: usize,
    pub max_x_labels: usize,
    pub font_size: f64,
    pub show_legend: bool,
    /// Emit CSS transitions on animated SVG attributes.
    pub css_transitions: bool,
    pub theme: ThemeMode,
    pub reveal: RevealOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: Size::default(),
            insets: Insets::default(),
            bar_padding: 0.2,
            corner_radius: 4.0,
            min_label_height: 12.0,
            min_label_pct: 8.0,
            donut_ratio: 0.0,
            grid_lines: 5,
            max_x_labels: 8,
            font_size: 11.0,
            show_legend: true,
            css_transitions: true,
            theme: ThemeMode::Light,
            reveal: RevealOptions::default(),
        }
    }
}

impl ChartOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ChartError::FileRead { path: path.to_path_buf(), source })?;
        let opts = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded chart options");
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts = ChartOptions::from_toml_str(
            r#"
            bar_padding = 0.1
            theme = "dark"

            [size]
            width = 800.0
            height = 400.0

            [insets]
            left = 60.0

            [reveal]
            line_delay_ms = 150
            easing = "linear"
            "#,
        )
        .unwrap();
        assert_eq!(opts.bar_padding, 0.1);
        assert_eq!(opts.theme, ThemeMode::Dark);
        assert_eq!(opts.size, Size::new(800.0, 400.0));
        assert_eq!(opts.insets.left, 60.0);
        assert_eq!(opts.insets.bottom, Insets::default().bottom);
        assert_eq!(opts.reveal.delay_for(ChartKind::Line), Duration::from_millis(150));
        assert_eq!(opts.reveal.delay_for(ChartKind::Bar), Duration::from_millis(100));
        assert_eq!(opts.reveal.easing, Easing::Linear);
        assert_eq!(opts.min_label_pct, 8.0);
    }

    #[test]
    fn negative_insets_from_toml_do_not_escape_canvas() {
        let opts = ChartOptions::from_toml_str("[insets]\nleft = -30.0\ntop = -1.0").unwrap();
        let plot = opts.insets.plot_rect(opts.size);
        assert_eq!((plot.left, plot.top), (0.0, 0.0));
        assert!(plot.right <= opts.size.width);
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = ChartOptions::from_toml_str("bar_padding = \"wide\"").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ChartOptions::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
