// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke test writing PNGs for each chart kind.

use chart_core::{Chart, ChartKind, HoverState, Series};
use chart_render_skia::SkiaRenderer;

fn series() -> Series {
    Series::from_pairs([("2024-01", 12.0), ("2024-02", 30.0), ("2024-03", 18.0), ("2024-04", 25.0)])
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
        let chart = Chart::new(kind, series());
        let scene = chart.render(1.0, &HoverState::at(1)).into_scene();

        let out = std::path::PathBuf::from(format!("target/test_out/smoke_{kind:?}.png").to_lowercase());
        renderer.render_to_png(&scene, &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");

        let bytes = renderer.render_to_png_bytes(&scene).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
        assert_eq!((img.width(), img.height()), (600, 300));
    }
}

#[test]
fn scale_multiplies_output_size() {
    let chart = Chart::new(ChartKind::Bar, series());
    let scene = chart.render(1.0, &HoverState::new()).into_scene();
    let bytes = SkiaRenderer::new().with_scale(2.0).render_to_png_bytes(&scene).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1200, 600));
}

#[test]
fn hidden_bars_leave_background_at_plot_floor() {
    let chart = Chart::new(ChartKind::Bar, series());
    let scene = chart.render(0.0, &HoverState::new()).into_scene();
    let bytes = SkiaRenderer::new().render_to_png_bytes(&scene).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let bg = chart.theme.background;
    // just above the baseline, in the middle of the first band
    let px = img.get_pixel(110, 255);
    assert_eq!(px.0, [bg.r, bg.g, bg.b, 255]);
}
