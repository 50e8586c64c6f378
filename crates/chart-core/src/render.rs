// File: crates/chart-core/src/render.rs
// Summary: Per-kind renderers mapping computed geometry to scene primitives.
// Notes:
// - Renderers hold no state: each call rebuilds the whole scene from the
//   series, the reveal progress and the hover index.

use crate::axis::{label_stride, shows_label, value_ticks};
use crate::config::ChartOptions;
use crate::geometry::{Point, RectF};
use crate::hover::{HoverState, Tooltip};
use crate::mapper::{BarLayout, LineLayout};
use crate::path::{area_path, line_path, revealed_count};
use crate::pie::{pie_slices, PieLayout, PieSlice, LABEL_RADIUS_FACTOR};
use crate::scene::{Primitive, Scene, TextAnchor};
use crate::series::Series;
use crate::text::{axis_label, format_percent, format_value, truncate};
use crate::theme::{Rgba, Theme};

pub const EMPTY_MESSAGE: &str = "No data available";
pub const INVALID_MESSAGE: &str = "Invalid data format";

const MAX_CATEGORY_CHARS: usize = 12;
const MARKER_RADIUS: f64 = 4.0;
const MARKER_RADIUS_HOVER: f64 = 6.0;
const LEGEND_WIDTH: f64 = 150.0;
const LEGEND_ROW: f64 = 20.0;
const DIMMED_ALPHA: u8 = 160;

/// Centered message on an otherwise blank canvas.
pub fn placeholder(message: &str, opts: &ChartOptions, theme: &Theme) -> Scene {
    let mut scene = Scene::new(opts.size, theme.background);
    let center = Point::new(opts.size.width * 0.5, opts.size.height * 0.5);
    scene.push(Primitive::text(center, message, opts.font_size + 3.0, TextAnchor::Middle, theme.placeholder));
    scene
}

fn dim(color: Rgba, hover: &HoverState, index: usize) -> Rgba {
    match hover.index() {
        Some(h) if h != index => color.with_alpha(color.a.min(DIMMED_ALPHA)),
        _ => color,
    }
}

fn grid(scene: &mut Scene, plot: RectF, ticks: &[(f64, f64)], opts: &ChartOptions, theme: &Theme) {
    for &(value, y) in ticks {
        scene.push(Primitive::Line {
            from: Point::new(plot.left, y),
            to: Point::new(plot.right, y),
            stroke: theme.grid,
            width: 1.0,
        });
        scene.push(Primitive::text(
            Point::new(plot.left - 6.0, y + opts.font_size * 0.35),
            format_value(value),
            opts.font_size,
            TextAnchor::End,
            theme.axis_label,
        ));
    }
}

fn category_labels<'a>(
    scene: &mut Scene,
    labels: impl ExactSizeIterator<Item = (f64, &'a str)>,
    baseline: f64,
    opts: &ChartOptions,
    theme: &Theme,
) {
    let count = labels.len();
    let stride = label_stride(count, opts.max_x_labels);
    for (i, (x, label)) in labels.enumerate() {
        if !shows_label(i, count, stride) {
            continue;
        }
        scene.push(Primitive::text(
            Point::new(x, baseline + opts.font_size + 6.0),
            truncate(&axis_label(label), MAX_CATEGORY_CHARS),
            opts.font_size,
            TextAnchor::Middle,
            theme.axis_label,
        ));
    }
}

/// Tooltip box and its text.
pub fn tooltip_primitives(scene: &mut Scene, tooltip: &Tooltip, opts: &ChartOptions, theme: &Theme) {
    scene.push(Primitive::Rect { rect: tooltip.rect, corner_radius: 4.0, fill: theme.tooltip_bg, animated: false });
    let x = tooltip.rect.left + Tooltip::PADDING;
    let mut y = tooltip.rect.top + Tooltip::PADDING + opts.font_size;
    scene.push(Primitive::Text {
        position: Point::new(x, y),
        content: tooltip.title.clone(),
        size: opts.font_size,
        anchor: TextAnchor::Start,
        fill: theme.tooltip_text,
        bold: true,
    });
    for line in &tooltip.lines {
        y += Tooltip::LINE_HEIGHT;
        scene.push(Primitive::text(Point::new(x, y), line.clone(), opts.font_size, TextAnchor::Start, theme.tooltip_text));
    }
}

// ---- bar ---------------------------------------------------------------------

pub fn bar_tooltip(series: &Series, opts: &ChartOptions, progress: f64, hover: &HoverState) -> Option<Tooltip> {
    let index = hover.valid_index(series)?;
    let point = series.get(index)?;
    let layout = BarLayout::new(series, opts.size, opts.insets, opts.bar_padding).ok()?;
    let bar = layout.bar(index, point.value, progress);
    let anchor = Point::new(layout.bands.band_center(index), bar.rect.top);
    Some(Tooltip::new(index, point, anchor, opts.size, opts.font_size))
}

pub fn render_bar(series: &Series, opts: &ChartOptions, theme: &Theme, progress: f64, hover: &HoverState) -> Scene {
    let mut scene = Scene::new(opts.size, theme.background);
    let layout = match BarLayout::new(series, opts.size, opts.insets, opts.bar_padding) {
        Ok(l) => l,
        Err(_) => return placeholder(EMPTY_MESSAGE, opts, theme),
    };
    let plot = layout.plot;

    let ticks: Vec<(f64, f64)> = value_ticks(0.0, layout.max_value, opts.grid_lines)
        .into_iter()
        .map(|t| (t, plot.bottom - t / layout.max_value * plot.height()))
        .collect();
    grid(&mut scene, plot, &ticks, opts, theme);

    let radius = opts.corner_radius.min(layout.bands.band_width() * 0.5).max(0.0);
    for (i, point) in series.points().iter().enumerate() {
        let bar = layout.bar(i, point.value, progress);
        scene.push(Primitive::Rect {
            rect: bar.rect,
            corner_radius: radius,
            fill: dim(theme.primary, hover, i),
            animated: true,
        });
        let labelled = progress > 0.0 && point.value != 0.0 && bar.full_height >= opts.min_label_height;
        if labelled {
            scene.push(Primitive::text(
                Point::new(layout.bands.band_center(i), bar.rect.top - 6.0),
                format_value(point.value),
                opts.font_size,
                TextAnchor::Middle,
                theme.text,
            ));
        }
    }

    category_labels(
        &mut scene,
        series.points().iter().enumerate().map(|(i, p)| (layout.bands.band_center(i), p.label.as_str())),
        plot.bottom,
        opts,
        theme,
    );

    if let Some(tip) = bar_tooltip(series, opts, progress, hover) {
        tooltip_primitives(&mut scene, &tip, opts, theme);
    }
    scene
}

// ---- line --------------------------------------------------------------------

pub fn line_tooltip(series: &Series, opts: &ChartOptions, hover: &HoverState) -> Option<Tooltip> {
    let index = hover.valid_index(series)?;
    let point = series.get(index)?;
    let layout = LineLayout::new(series, opts.size, opts.insets).ok()?;
    let anchor = layout.point(index, point.value);
    Some(Tooltip::new(index, point, anchor, opts.size, opts.font_size))
}

pub fn render_line(series: &Series, opts: &ChartOptions, theme: &Theme, progress: f64, hover: &HoverState) -> Scene {
    let mut scene = Scene::new(opts.size, theme.background);
    let layout = match LineLayout::new(series, opts.size, opts.insets) {
        Ok(l) => l,
        Err(_) => return placeholder(EMPTY_MESSAGE, opts, theme),
    };
    let plot = layout.plot;
    let (min, max) = layout.y.domain;
    let ticks: Vec<(f64, f64)> = value_ticks(min, max, opts.grid_lines)
        .into_iter()
        .map(|t| (t, layout.y.to_px(t)))
        .collect();
    grid(&mut scene, plot, &ticks, opts, theme);

    let points: Vec<Point> = series.values().enumerate().map(|(i, v)| layout.point(i, v)).collect();
    scene.push(Primitive::Path {
        path: area_path(&points, layout.baseline(), progress),
        fill: Some(theme.area_fill),
        stroke: None,
        animated: true,
    });
    scene.push(Primitive::Path {
        path: line_path(&points, progress),
        fill: None,
        stroke: Some((theme.primary, 2.0)),
        animated: true,
    });

    let hovered = hover.valid_index(series);
    for (i, p) in points.iter().take(revealed_count(points.len(), progress)).enumerate() {
        let radius = if hovered == Some(i) { MARKER_RADIUS_HOVER } else { MARKER_RADIUS };
        scene.push(Primitive::Circle {
            center: *p,
            radius,
            fill: theme.primary,
            stroke: Some((theme.marker_stroke, 2.0)),
        });
    }

    category_labels(
        &mut scene,
        series.points().iter().zip(points.iter()).map(|(sp, p)| (p.x, sp.label.as_str())),
        plot.bottom,
        opts,
        theme,
    );

    if let Some(tip) = line_tooltip(series, opts, hover) {
        tooltip_primitives(&mut scene, &tip, opts, theme);
    }
    scene
}

// ---- pie ---------------------------------------------------------------------

/// Centre and radius for the pie, leaving room on the right for the legend.
pub fn pie_layout(opts: &ChartOptions) -> PieLayout {
    let plot = opts.insets.plot_rect(opts.size);
    let legend = if opts.show_legend { LEGEND_WIDTH.min(plot.width() * 0.5) } else { 0.0 };
    let w = plot.width() - legend;
    let radius = (w.min(plot.height()) * 0.5 - 4.0).max(0.0);
    let center = Point::new(plot.left + w * 0.5, plot.top + plot.height() * 0.5);
    PieLayout::new(center, radius)
        .donut(radius * opts.donut_ratio.clamp(0.0, 0.9))
        .with_min_label_pct(opts.min_label_pct)
}

pub fn pie_tooltip(series: &Series, opts: &ChartOptions, progress: f64, hover: &HoverState) -> Option<Tooltip> {
    let index = hover.valid_index(series)?;
    let point = series.get(index)?;
    let layout = pie_layout(opts);
    let slices = pie_slices(series, &layout, progress);
    let slice = slices.get(index)?;
    let mid = slice.start_angle + slice.span() * 0.5;
    let anchor = layout.center.polar(layout.radius * LABEL_RADIUS_FACTOR, mid);
    let lines = vec![format_value(point.value), format_percent(slice.percentage)];
    Some(Tooltip::with_lines(index, point.label.clone(), lines, anchor, opts.size, opts.font_size))
}

pub fn render_pie(series: &Series, opts: &ChartOptions, theme: &Theme, progress: f64, hover: &HoverState) -> Scene {
    let mut scene = Scene::new(opts.size, theme.background);
    let layout = pie_layout(opts);
    let slices = pie_slices(series, &layout, progress);

    for slice in slices.iter().filter(|s| s.span() > 0.0) {
        scene.push(Primitive::Path {
            path: slice.path.clone(),
            fill: Some(dim(theme.slice_color(slice.index), hover, slice.index)),
            stroke: Some((theme.background, 2.0)),
            animated: true,
        });
    }
    for slice in slices.iter().filter(|s| s.span() > 0.0) {
        if let Some(pos) = slice.label_position {
            scene.push(Primitive::Text {
                position: Point::new(pos.x, pos.y + opts.font_size * 0.35),
                content: format_percent(slice.percentage),
                size: opts.font_size,
                anchor: TextAnchor::Middle,
                fill: Rgba::rgb(255, 255, 255),
                bold: true,
            });
        }
    }

    if opts.show_legend {
        legend(&mut scene, series, &slices, &layout, opts, theme);
    }

    if let Some(tip) = pie_tooltip(series, opts, progress, hover) {
        tooltip_primitives(&mut scene, &tip, opts, theme);
    }
    scene
}

fn legend(scene: &mut Scene, series: &Series, slices: &[PieSlice], layout: &PieLayout, opts: &ChartOptions, theme: &Theme) {
    let left = layout.center.x + layout.radius + 24.0;
    let rows = slices.len() as f64;
    let mut y = layout.center.y - rows * LEGEND_ROW * 0.5;
    for (slice, point) in slices.iter().zip(series.points()) {
        scene.push(Primitive::Rect {
            rect: RectF::from_ltwh(left, y, 10.0, 10.0),
            corner_radius: 2.0,
            fill: theme.slice_color(slice.index),
            animated: false,
        });
        scene.push(Primitive::text(
            Point::new(left + 16.0, y + 9.0),
            format!("{} ({})", truncate(&point.label, MAX_CATEGORY_CHARS), format_percent(slice.percentage)),
            opts.font_size,
            TextAnchor::Start,
            theme.text,
        ));
        y += LEGEND_ROW;
    }
}
