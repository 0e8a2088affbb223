// File: crates/graph-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use std::path::PathBuf;

use crate::grid::{format_tick, linspace};
use crate::samples::SampleSet;
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

/// Major tick counts per axis; gridlines are drawn at every tick.
const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Fixed margins; ignored when `tight` computes them from label text.
    pub insets: Insets,
    pub theme: Theme,
    pub line_width: f32,
    pub label_size: f32,
    pub title_size: f32,
    /// Disable for pixel-deterministic renders (tests) and when no font is
    /// available.
    pub draw_labels: bool,
    /// Trim margins to the measured tick and axis label extents.
    pub tight: bool,
    /// Typeface for all labels. `None` falls back to the system default,
    /// which may lack non-ASCII glyph coverage.
    pub font: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            line_width: 1.0,
            label_size: 14.0,
            title_size: 26.0,
            draw_labels: true,
            tight: true,
            font: None,
        }
    }
}

pub struct Chart {
    pub samples: SampleSet,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            samples: SampleSet::default(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn with_samples(samples: SampleSet) -> Self {
        let mut chart = Self::new();
        chart.samples = samples;
        chart
    }

    /// Fit the y axis to the data with a fractional `margin` of the span
    /// padded on both ends. The x axis is never touched here; it stays at
    /// whatever fixed range it was given.
    pub fn autoscale_y(&mut self, margin: f64) {
        let times = self.samples.times();
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &t in times {
            y_min = y_min.min(t);
            y_max = y_max.max(t);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        if (y_max - y_min).abs() < 1e-12 {
            y_max = y_min + 1.0;
        }
        let pad = (y_max - y_min) * margin;
        self.y_axis.min = y_min - pad;
        self.y_axis.max = y_max + pad;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster
    /// surface, overwriting any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, data)
            .with_context(|| format!("writing chart to '{}'", path.display()))?;
        Ok(())
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels {
            Some(match &opts.font {
                Some(path) => TextShaper::from_file(path)?,
                None => TextShaper::system(),
            })
        } else {
            None
        };

        let insets = match &shaper {
            Some(shaper) if opts.tight => self.fit_insets(shaper, opts),
            _ => opts.insets,
        };

        let plot_left = insets.left as f32;
        let plot_right = (opts.width - insets.right as i32) as f32;
        let plot_top = insets.top as f32;
        let plot_bottom = (opts.height - insets.bottom as i32) as f32;

        let sx = LinearScale::new(plot_left, plot_right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot_bottom, plot_top, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, &opts.theme, &self.x_axis, &self.y_axis, &sx, &sy, plot_left, plot_top, plot_right, plot_bottom);
        draw_frame(canvas, &opts.theme, plot_left, plot_top, plot_right, plot_bottom);

        if let Some(shaper) = &shaper {
            draw_labels(
                canvas, shaper, opts, &self.x_axis, &self.y_axis, self.title.as_deref(),
                &sx, &sy, plot_left, plot_top, plot_right, plot_bottom,
            );
        }

        draw_series(canvas, opts, &self.samples, &sx, &sy, plot_left, plot_top, plot_right, plot_bottom);

        Ok(surface)
    }

    /// Margins sized so tick labels, axis labels, and the optional title
    /// all fit with a few pixels of breathing room.
    fn fit_insets(&self, shaper: &TextShaper, opts: &RenderOptions) -> Insets {
        let tick_size = tick_size(opts);
        let y_tick_w = linspace(self.y_axis.min, self.y_axis.max, Y_TICKS)
            .iter()
            .map(|&v| shaper.measure(&format_tick(v), tick_size))
            .fold(0.0_f32, f32::max);
        let last_x_tick_w = shaper.measure(&format_tick(self.x_axis.max), tick_size);

        // Left edge hosts the rotated y label (one line-height wide) plus
        // the y tick labels.
        let left = opts.label_size + 8.0 + y_tick_w + 6.0;
        let bottom = tick_size + 6.0 + opts.label_size + 8.0;
        let right = (last_x_tick_w * 0.5 + 4.0).max(8.0);
        let top = match &self.title {
            Some(_) => opts.title_size + 12.0,
            None => 10.0,
        };
        Insets::new(
            left.ceil() as u32,
            right.ceil() as u32,
            top.ceil() as u32,
            bottom.ceil() as u32,
        )
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn tick_size(opts: &RenderOptions) -> f32 {
    opts.label_size * 0.8
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    x_axis: &Axis,
    y_axis: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals at x major ticks
    for v in linspace(x_axis.min, x_axis.max, X_TICKS) {
        let x = sx.to_px(v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals at y major ticks
    for v in linspace(y_axis.min, y_axis.max, Y_TICKS) {
        let y = sy.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, theme: &Theme, l: f32, t: f32, r: f32, b: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    x_axis: &Axis,
    y_axis: &Axis,
    title: Option<&str>,
    sx: &LinearScale,
    sy: &LinearScale,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
) {
    let tick_size = tick_size(opts);
    let tick_font = shaper.font(tick_size);
    let label_font = shaper.font(opts.label_size);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(opts.theme.tick_label);
    tick_paint.set_anti_alias(true);

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(opts.theme.axis_label);
    label_paint.set_anti_alias(true);

    // x tick labels, centered under their gridline
    for v in linspace(x_axis.min, x_axis.max, X_TICKS) {
        let text = format_tick(v);
        let w = shaper.measure(&text, tick_size);
        canvas.draw_str(&text, (sx.to_px(v) - w * 0.5, b + tick_size + 4.0), &tick_font, &tick_paint);
    }
    // y tick labels, right-aligned left of the frame
    for v in linspace(y_axis.min, y_axis.max, Y_TICKS) {
        let text = format_tick(v);
        let w = shaper.measure(&text, tick_size);
        canvas.draw_str(&text, (l - w - 6.0, sy.to_px(v) + tick_size * 0.35), &tick_font, &tick_paint);
    }

    // x axis label, centered below the tick row
    let xw = shaper.measure(&x_axis.label, opts.label_size);
    canvas.draw_str(
        &x_axis.label,
        ((l + r) * 0.5 - xw * 0.5, b + tick_size + 6.0 + opts.label_size + 2.0),
        &label_font,
        &label_paint,
    );

    // y axis label, rotated 90° along the left edge
    let yw = shaper.measure(&y_axis.label, opts.label_size);
    canvas.save();
    canvas.translate((opts.label_size, (t + b) * 0.5 + yw * 0.5));
    canvas.rotate(-90.0, None);
    canvas.draw_str(&y_axis.label, (0.0, 0.0), &label_font, &label_paint);
    canvas.restore();

    if let Some(title) = title {
        let title_font = shaper.font(opts.title_size);
        let mut title_paint = skia::Paint::default();
        title_paint.set_color(opts.theme.title);
        title_paint.set_anti_alias(true);
        let tw = shaper.measure(title, opts.title_size);
        canvas.draw_str(title, ((l + r) * 0.5 - tw * 0.5, t - 8.0), &title_font, &title_paint);
    }
}

fn draw_series(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    samples: &SampleSet,
    sx: &LinearScale,
    sy: &LinearScale,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
) {
    let points = samples.points();
    if points.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = points[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in points.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_color(opts.theme.line_stroke);

    // Data outside the fixed axis range never escapes the plot rect.
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), None, None);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}
