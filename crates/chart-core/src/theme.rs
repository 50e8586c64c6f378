// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, passed explicitly to renderers.

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`; alpha is emitted separately as an opacity attribute.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub text: Rgba,
    pub primary: Rgba,
    pub area_fill: Rgba,
    pub marker_stroke: Rgba,
    pub tooltip_bg: Rgba,
    pub tooltip_text: Rgba,
    pub placeholder: Rgba,
    /// Slice colours, cycled by index.
    pub palette: Vec<Rgba>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(229, 231, 235),
            axis_label: Rgba::rgb(107, 114, 128),
            text: Rgba::rgb(17, 24, 39),
            primary: Rgba::rgb(59, 130, 246),
            area_fill: Rgba::rgba(59, 130, 246, 51),
            marker_stroke: Rgba::rgb(255, 255, 255),
            tooltip_bg: Rgba::rgba(17, 24, 39, 230),
            tooltip_text: Rgba::rgb(249, 250, 251),
            placeholder: Rgba::rgb(156, 163, 175),
            palette: vec![
                Rgba::rgb(59, 130, 246),
                Rgba::rgb(16, 185, 129),
                Rgba::rgb(245, 158, 11),
                Rgba::rgb(239, 68, 68),
                Rgba::rgb(139, 92, 246),
                Rgba::rgb(236, 72, 153),
                Rgba::rgb(20, 184, 166),
                Rgba::rgb(249, 115, 22),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(17, 24, 39),
            grid: Rgba::rgb(55, 65, 81),
            axis_label: Rgba::rgb(156, 163, 175),
            text: Rgba::rgb(243, 244, 246),
            primary: Rgba::rgb(96, 165, 250),
            area_fill: Rgba::rgba(96, 165, 250, 64),
            marker_stroke: Rgba::rgb(17, 24, 39),
            tooltip_bg: Rgba::rgba(243, 244, 246, 235),
            tooltip_text: Rgba::rgb(17, 24, 39),
            placeholder: Rgba::rgb(107, 114, 128),
            palette: vec![
                Rgba::rgb(96, 165, 250),
                Rgba::rgb(52, 211, 153),
                Rgba::rgb(251, 191, 36),
                Rgba::rgb(248, 113, 113),
                Rgba::rgb(167, 139, 250),
                Rgba::rgb(244, 114, 182),
                Rgba::rgb(45, 212, 191),
                Rgba::rgb(251, 146, 60),
            ],
        }
    }

    pub fn slice_color(&self, index: usize) -> Rgba {
        if self.palette.is_empty() {
            return self.primary;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// Theme preference with its two lifecycle steps: initialise from a persisted
/// value, toggle and persist again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a stored preference; anything unrecognised means light.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn theme(&self) -> Theme {
        find(self.as_str())
    }
}
