// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV/JSON analytics export and renders bar, line and pie charts to SVG and PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chart_core::{Chart, ChartKind, ChartOptions, HoverState, Series, ThemeMode};
use chart_render_skia::SkiaRenderer;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Bar,
    Line,
    Pie,
}

impl From<KindArg> for ChartKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Bar => ChartKind::Bar,
            KindArg::Line => ChartKind::Line,
            KindArg::Pie => ChartKind::Pie,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dashchart-demo")]
#[command(author, version, about = "Render dashboard charts from an analytics export")]
struct Cli {
    /// CSV or JSON file of records (label/date/user/category + value/count/views).
    input: Option<PathBuf>,

    /// Chart kinds to render.
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = [KindArg::Bar, KindArg::Line, KindArg::Pie])]
    kind: Vec<KindArg>,

    /// TOML options file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme; overrides the options file.
    #[arg(long)]
    theme: Option<String>,

    /// Output directory.
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Data point to render as hovered.
    #[arg(long)]
    hover: Option<usize>,

    /// Also write this many frames of the reveal transition per chart.
    #[arg(long, default_value_t = 0)]
    frames: usize,

    /// Skip PNG output (SVG only).
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => ChartOptions::load(path).with_context(|| format!("failed to load options '{}'", path.display()))?,
        None => ChartOptions::default(),
    };
    if let Some(theme) = cli.theme.as_deref() {
        options.theme = ThemeMode::from_persisted(Some(theme));
    }

    let (series, stem) = match &cli.input {
        Some(path) => (load_series(path)?, file_stem(path)),
        None => (sample_series(), "sample".to_string()),
    };
    tracing::info!(points = series.len(), total = series.total(), theme = options.theme.as_str(), "loaded series");

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    let renderer = (!cli.no_png).then(SkiaRenderer::new);
    let hover = cli.hover.map(HoverState::at).unwrap_or_default();

    for kind in cli.kind.iter().copied().map(ChartKind::from) {
        let chart = Chart::new(kind, series.clone()).with_options(options.clone());
        let name = format!("{stem}_{}", format!("{kind:?}").to_lowercase());

        let svg = cli.out.join(format!("{name}.svg"));
        chart.render_to_svg(1.0, &hover, &svg)?;
        println!("Wrote {}", svg.display());

        if let Some(renderer) = &renderer {
            let png = cli.out.join(format!("{name}.png"));
            renderer.render_to_png(chart.render(1.0, &hover).scene(), &png)?;
            println!("Wrote {}", png.display());
        }

        if cli.frames > 0 {
            write_reveal_frames(&chart, &cli.out, &name, cli.frames)?;
        }
    }
    Ok(())
}

/// Step the reveal driver on a synthetic clock and write one SVG per frame,
/// without CSS transitions so each file shows its own progress.
fn write_reveal_frames(chart: &Chart, out: &Path, name: &str, frames: usize) -> Result<()> {
    let Some(series) = chart.series() else {
        tracing::warn!(name, "invalid data; no reveal frames");
        return Ok(());
    };
    let mut chart = chart.clone();
    chart.options.css_transitions = false;
    let mut driver = chart.reveal_driver();
    let t0 = Instant::now();
    driver.on_data(series.id(), t0);

    let span = driver.delay() + chart.options.reveal.transition();
    let dir = out.join(format!("{name}_frames"));
    for i in 0..frames {
        let now = t0 + span.mul_f64(i as f64 / (frames.max(2) - 1) as f64);
        driver.tick(now);
        let progress = driver.eased_progress(now);
        let path = dir.join(format!("frame_{i:03}.svg"));
        chart.render_to_svg(progress, &HoverState::new(), &path)?;
        tracing::debug!(frame = i, progress, "wrote frame");
    }
    println!("Wrote {} frames to {}", frames, dir.display());
    Ok(())
}

fn load_series(path: &Path) -> Result<Series> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let series = match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Series::from_json_str(&text)
        }
        _ => Series::from_csv_path(path),
    };
    series.with_context(|| format!("failed to load '{}'", path.display()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}

fn sample_series() -> Series {
    Series::from_pairs([
        ("2024-01", 1_240.0),
        ("2024-02", 1_810.0),
        ("2024-03", 1_530.0),
        ("2024-04", 2_260.0),
        ("2024-05", 2_045.0),
        ("2024-06", 2_730.0),
    ])
}
