// File: crates/chart-core/tests/scenarios.rs
// Purpose: End-to-end render scenarios: bar labels, empty and invalid input, single-point lines, hover.

use chart_core::render::{EMPTY_MESSAGE, INVALID_MESSAGE};
use chart_core::{Chart, ChartKind, ChartOptions, HoverState, Point, Primitive, Rendered, Series, TextAnchor};
use serde_json::json;

fn authors() -> Series {
    Series::from_records(&[
        json!({"user": "A", "count": 10}),
        json!({"user": "B", "count": 0}),
        json!({"user": "C", "count": 5}),
    ])
    .unwrap()
}

#[test]
fn bar_heights_follow_max_and_zero_bar_has_no_label() {
    let chart = Chart::new(ChartKind::Bar, authors());
    let rendered = chart.render(1.0, &HoverState::new());
    let scene = rendered.scene();

    let bars: Vec<_> = scene.animated_rects().collect();
    assert_eq!(bars.len(), 3);
    let full = bars[0].height();
    assert!(full > 0.0);
    assert_eq!(bars[1].height(), 0.0);
    assert!((bars[2].height() - full * 0.5).abs() < 1e-9);

    // value labels sit above the plot floor, centred; tick labels are end-anchored
    let plot = chart.options.insets.plot_rect(chart.options.size);
    let value_labels: Vec<&str> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { position, content, anchor: TextAnchor::Middle, .. } if position.y < plot.bottom => {
                Some(content.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(value_labels, vec!["10", "5"]);
    assert!(scene.texts().any(|t| t == "B"), "category label still drawn");
}

#[test]
fn hidden_bars_start_at_zero_height() {
    let chart = Chart::new(ChartKind::Bar, authors());
    let scene = chart.render(0.0, &HoverState::new()).into_scene();
    assert!(scene.animated_rects().all(|r| r.height() == 0.0));
}

#[test]
fn empty_input_renders_placeholder_for_every_kind() {
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let chart = Chart::from_records(kind, &[]).unwrap();
        let rendered = chart.render(1.0, &HoverState::at(0));
        assert!(rendered.is_empty(), "{kind:?}");
        assert_eq!(rendered.scene().texts().collect::<Vec<_>>(), vec![EMPTY_MESSAGE]);
        assert_eq!(rendered.scene().paths().count(), 0);
    }
}

#[test]
fn malformed_input_renders_invalid_placeholder_for_every_kind() {
    let records = [json!({"foo": 1}), json!({"bar": "x"})];
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let chart = Chart::from_records(kind, &records).unwrap();
        let rendered = chart.render(1.0, &HoverState::new());
        assert!(rendered.is_invalid(), "{kind:?}");
        assert_eq!(rendered.scene().texts().collect::<Vec<_>>(), vec![INVALID_MESSAGE]);
    }
}

#[test]
fn single_point_line_sits_on_left_padding() {
    let series = Series::from_records(&[json!({"date": "2024-01", "count": 5})]).unwrap();
    let chart = Chart::new(ChartKind::Line, series);
    let scene = chart.render(1.0, &HoverState::new()).into_scene();
    let markers: Vec<_> = scene.circles().collect();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].0.x, chart.options.insets.left);
    assert!(markers[0].0.y.is_finite());
    assert!(scene.texts().any(|t| t == "Jan 2024"));
}

#[test]
fn line_reveal_hides_markers_until_flip() {
    let series = Series::from_pairs((0..10).map(|i| (format!("d{i}"), i as f64)));
    let chart = Chart::new(ChartKind::Line, series);
    let hidden = chart.render(0.0, &HoverState::new()).into_scene();
    let shown = chart.render(1.0, &HoverState::new()).into_scene();
    assert_eq!(hidden.circles().count(), 1);
    assert_eq!(shown.circles().count(), 10);
}

#[test]
fn hovered_line_point_gets_tooltip_and_bigger_marker() {
    let series = Series::from_pairs([("a", 1.0), ("b", 3.0), ("c", 2.0)]);
    let chart = Chart::new(ChartKind::Line, series);
    let scene = chart.render(1.0, &HoverState::at(1)).into_scene();
    let radii: Vec<f64> = scene.circles().map(|(_, r)| r).collect();
    assert!(radii[1] > radii[0]);
    assert!(scene.texts().any(|t| t == "b"));
    let tip = chart.tooltip(1.0, &HoverState::at(1)).unwrap();
    assert_eq!(tip.title, "b");
    assert_eq!(tip.lines, vec!["3".to_string()]);
}

#[test]
fn stale_hover_after_data_change_draws_no_tooltip() {
    let mut chart = Chart::new(ChartKind::Bar, authors());
    let hover = HoverState::at(2);
    assert!(chart.tooltip(1.0, &hover).is_some());
    chart.set_series(Series::from_pairs([("only", 1.0)]));
    assert!(chart.tooltip(1.0, &hover).is_none());
    assert!(matches!(chart.render(1.0, &hover), Rendered::Scene(_)));
}

#[test]
fn pointer_hit_testing_matches_geometry() {
    let chart = Chart::new(ChartKind::Bar, authors());
    let opts = &chart.options;
    let plot = opts.insets.plot_rect(opts.size);
    let slot = plot.width() / 3.0;
    let p = Point::new(plot.left + slot * 2.5, plot.bottom - 1.0);
    assert_eq!(chart.hit_test(p, 1.0), Some(2));
    assert_eq!(chart.hit_test(Point::new(1.0, 1.0), 1.0), None);

    let pie = Chart::new(ChartKind::Pie, Series::from_pairs([("x", 1.0), ("y", 1.0)]));
    let layout = chart_core::render::pie_layout(&pie.options);
    let right = layout.center.polar(layout.radius * 0.5, 0.0);
    let left = layout.center.polar(layout.radius * 0.5, std::f64::consts::PI);
    assert_eq!(pie.hit_test(right, 1.0), Some(0));
    assert_eq!(pie.hit_test(left, 1.0), Some(1));
    assert_eq!(pie.hit_test(right, 0.0), None);
}

#[test]
fn pie_labels_skip_thin_slices_and_legend_lists_all() {
    let series = Series::from_pairs([("News", 60.0), ("Tech", 35.0), ("Misc", 5.0)]);
    let chart = Chart::new(ChartKind::Pie, series);
    let scene = chart.render(1.0, &HoverState::new()).into_scene();
    let texts: Vec<&str> = scene.texts().collect();
    assert!(texts.contains(&"60%"));
    assert!(texts.contains(&"35%"));
    assert!(!texts.contains(&"5%"));
    assert!(texts.contains(&"Misc (5%)"));
    assert_eq!(scene.paths().count(), 3);
}

#[test]
fn dark_theme_from_options() {
    let opts = ChartOptions::from_toml_str("theme = \"dark\"").unwrap();
    let chart = Chart::new(ChartKind::Bar, authors()).with_options(opts);
    assert_eq!(chart.theme.name, "dark");
    assert_eq!(chart.render(1.0, &HoverState::new()).scene().background, chart.theme.background);
}

#[test]
fn invalid_scene_is_never_a_primitive_soup() {
    let chart = Chart::from_records(ChartKind::Line, &[json!(1), json!(null)]).unwrap();
    let scene = chart.render(1.0, &HoverState::new()).into_scene();
    assert_eq!(scene.len(), 1);
    assert!(matches!(scene.primitives[0], Primitive::Text { .. }));
}
