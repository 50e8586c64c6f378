// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints a core Scene and encodes it as PNG.

use anyhow::{Context, Result};
use chart_core::scene::{Primitive, Scene, TextAnchor};
use chart_core::{PathCommand, PathDescriptor, Rgba};
use skia_safe as skia;

/// Headless renderer. Typefaces are resolved once and reused across frames.
pub struct SkiaRenderer {
    regular: Option<skia::Typeface>,
    bold: Option<skia::Typeface>,
    scale: f32,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::new();
        let regular = mgr.legacy_make_typeface(None, skia::FontStyle::normal());
        let bold = mgr.legacy_make_typeface(None, skia::FontStyle::bold());
        if regular.is_none() {
            tracing::warn!("no system typeface found; text will not be drawn");
        }
        Self { regular, bold, scale: 1.0 }
    }

    /// Device pixel ratio; output dimensions are the scene size times `scale`.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.1);
        self
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let w = (scene.size.width as f32 * self.scale).round().max(1.0) as i32;
        let h = (scene.size.height as f32 * self.scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(scene.background));
        canvas.scale((self.scale, self.scale));

        for p in &scene.primitives {
            self.draw(canvas, p);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(width = w, height = h, primitives = scene.len(), "rasterized scene");
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, p: &Primitive) {
        match p {
            Primitive::Rect { rect, corner_radius, fill, .. } => {
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                let radius = *corner_radius as f32;
                canvas.draw_round_rect(r, radius, radius, &fill_paint(*fill));
            }
            Primitive::Circle { center, radius, fill, stroke } => {
                let c = (center.x as f32, center.y as f32);
                canvas.draw_circle(c, *radius as f32, &fill_paint(*fill));
                if let Some((s, width)) = stroke {
                    canvas.draw_circle(c, *radius as f32, &stroke_paint(*s, *width));
                }
            }
            Primitive::Path { path, fill, stroke, .. } => {
                let sk = to_skia_path(path);
                if let Some(f) = fill {
                    canvas.draw_path(&sk, &fill_paint(*f));
                }
                if let Some((s, width)) = stroke {
                    canvas.draw_path(&sk, &stroke_paint(*s, *width));
                }
            }
            Primitive::Line { from, to, stroke, width } => {
                canvas.draw_line(
                    (from.x as f32, from.y as f32),
                    (to.x as f32, to.y as f32),
                    &stroke_paint(*stroke, *width),
                );
            }
            Primitive::Text { position, content, size, anchor, fill, bold } => {
                let typeface = if *bold { self.bold.as_ref().or(self.regular.as_ref()) } else { self.regular.as_ref() };
                let Some(typeface) = typeface else { return };
                let font = skia::Font::new(typeface.clone(), *size as f32);
                let paint = fill_paint(*fill);
                let (width, _) = font.measure_str(content, Some(&paint));
                let x = match anchor {
                    TextAnchor::Start => position.x as f32,
                    TextAnchor::Middle => position.x as f32 - width * 0.5,
                    TextAnchor::End => position.x as f32 - width,
                };
                canvas.draw_str(content, (x, position.y as f32), &font, &paint);
            }
        }
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn stroke_paint(c: Rgba, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color(c));
    paint
}

/// SVG-style arcs map onto Skia's elliptical arc with equal radii; a positive
/// sweep in y-down space is clockwise.
fn to_skia_path(desc: &PathDescriptor) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in desc.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                path.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::LineTo(p) => {
                path.line_to((p.x as f32, p.y as f32));
            }
            PathCommand::Arc { radius, large_arc, sweep, to } => {
                let size = if large_arc { skia::path::ArcSize::Large } else { skia::path::ArcSize::Small };
                let dir = if sweep { skia::PathDirection::CW } else { skia::PathDirection::CCW };
                path.arc_to_rotated((radius as f32, radius as f32), 0.0, size, dir, (to.x as f32, to.y as f32));
            }
            PathCommand::Close => {
                path.close();
            }
        }
    }
    path
}
