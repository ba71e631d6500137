// File: crates/curve-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file, PNG bytes, RGBA8) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 15.0;
const TICK_LABEL_SIZE: f32 = 13.0;
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels and tick labels. Off makes output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Pixel rectangle of the plot area for the given options.
    pub fn plot_rect(&self, opts: &RenderOptions) -> RectI32 {
        let right = (opts.width - opts.insets.right as i32).max(opts.insets.left as i32 + 1);
        let bottom = (opts.height - opts.insets.bottom as i32).max(opts.insets.top as i32 + 1);
        RectI32::from_ltrb(opts.insets.left as i32, opts.insets.top as i32, right, bottom)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// The file is only touched once encoding has succeeded; an existing file is overwritten.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render the chart and return the encoded PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading pixels from raster surface failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid canvas size {}x{}", opts.width, opts.height);
        }
        if opts.insets.hsum() as i32 >= opts.width || opts.insets.vsum() as i32 >= opts.height {
            anyhow::bail!("insets {:?} leave no plot area on a {}x{} canvas", opts.insets, opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let plot = self.plot_rect(opts);
        let sx = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        log::debug!(
            "rendering {}x{} plot={:?} x=[{}, {}] y=[{}, {}]",
            opts.width, opts.height, plot,
            self.x_axis.min, self.x_axis.max, self.y_axis.min, self.y_axis.max
        );

        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);
        fill_plot_background(canvas, &plot, theme);

        let x_ticks = self.x_axis.tick_values();
        let y_ticks = self.y_axis.tick_values();

        if self.grid {
            draw_grid(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        // Series are clipped to the plot area.
        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &sx, &sy, s, theme);
        }
        canvas.restore();

        draw_frame(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, &shaper, &plot, self, theme);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn fill_plot_background(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(theme.plot_background);
    canvas.draw_rect(to_rect(plot), &paint);
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let (l, r) = (plot.left as f32, plot.right as f32);
    // verticals
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(to_rect(plot), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let b = plot.bottom as f32;
    let l = plot.left as f32;
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick_paint);
    }
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    theme: &Theme,
) {
    if series.is_empty() {
        return;
    }

    // A non-finite point breaks the line into separate runs.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (sx.to_px(x), sy.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(theme.line_stroke);
    canvas.draw_path(&path, &stroke);

    if let Marker::Circle { radius } = series.marker {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.marker_fill);
        for (x, y) in series.finite_points() {
            canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius, &fill);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    use crate::grid::format_tick;

    let below = plot.bottom as f32 + TICK_LEN + TICK_LABEL_SIZE + 4.0;
    for &x in x_ticks {
        shaper.draw_centered(canvas, &format_tick(x), sx.to_px(x), below, TICK_LABEL_SIZE, theme.tick);
    }
    let left = plot.left as f32 - TICK_LEN - 4.0;
    for &y in y_ticks {
        shaper.draw_right(canvas, &format_tick(y), left, sy.to_px(y), TICK_LABEL_SIZE, theme.tick);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, chart: &Chart, theme: &Theme) {
    if !chart.title.is_empty() {
        shaper.draw_centered(canvas, &chart.title, plot.center_x(), plot.top as f32 - 14.0, TITLE_SIZE, theme.title);
    }
    if !chart.x_axis.label.is_empty() {
        let y = plot.bottom as f32 + TICK_LEN + TICK_LABEL_SIZE + LABEL_SIZE + 18.0;
        shaper.draw_centered(canvas, &chart.x_axis.label, plot.center_x(), y, LABEL_SIZE, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        let x = plot.left as f32 - TICK_LEN - 4.0 - 3.0 * TICK_LABEL_SIZE - LABEL_SIZE;
        shaper.draw_vertical(canvas, &chart.y_axis.label, x.max(LABEL_SIZE), plot.center_y(), LABEL_SIZE, theme.axis_label);
    }
}
