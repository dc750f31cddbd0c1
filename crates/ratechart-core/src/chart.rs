// File: crates/ratechart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::ChartError;
use crate::grid::{format_tick, linspace};
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, and tick labels. Off for pixel-exact tests
    /// where platform font differences would add noise.
    pub draw_labels: bool,
    pub grid_x_lines: usize,
    pub grid_y_lines: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            grid_x_lines: 10,
            grid_y_lines: 6,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data bounding range, then widen each span by
    /// `margin` (a fraction, e.g. 0.05 for 5%).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut view = ViewState::from_chart(self);
        if margin > 0.0 {
            let mx = (view.x_max - view.x_min) * margin;
            let my = (view.y_max - view.y_min) * margin;
            view.x_min -= mx;
            view.x_max += mx;
            view.y_min -= my;
            view.y_max += my;
        }
        view.apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceUnavailable)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceUnavailable)?;
        self.draw(surface.canvas(), opts);

        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::SurfaceUnavailable);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    // Full draw pass onto an existing canvas. Stateless: identical charts and
    // options produce identical pixels on every call.
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left;
        let plot_right = opts.width - opts.insets.right;
        let plot_top = opts.insets.top;
        let plot_bottom = opts.height - opts.insets.bottom;

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, opts);
        draw_axis_lines(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(
                canvas,
                &shaper,
                plot_left,
                plot_top,
                plot_right,
                plot_bottom,
                self,
                opts,
            );
        }

        for s in &self.series {
            draw_line_series(
                canvas,
                plot_left,
                plot_top,
                plot_right,
                plot_bottom,
                &self.x_axis,
                &self.y_axis,
                s,
                theme,
            );
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot line chart: zip `xs`/`ys` into a circle-marker line series, fit
/// the axes to the data, and write a PNG. Fails with
/// [`ChartError::MismatchedLengths`] before anything is drawn.
pub fn render_line_chart(
    xs: &[f64],
    ys: &[f64],
    title: &str,
    xlabel: &str,
    ylabel: &str,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<(), ChartError> {
    let series = Series::from_xy(xs, ys)?.with_marker(Marker::Circle);

    let mut chart = Chart::new();
    chart.title = title.to_string();
    chart.x_axis = Axis::new(xlabel, 0.0, 1.0);
    chart.y_axis = Axis::new(ylabel, 0.0, 1.0);
    chart.add_series(series);
    chart.autoscale_axes(0.0);

    chart.render_to_png(opts, output_png_path)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, opts.grid_x_lines) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, opts.grid_y_lines) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    chart: &Chart,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;

    // Title, centered in the top band
    if !chart.title.is_empty() {
        let cx = (l + r) as f32 * 0.5;
        shaper.draw_center(canvas, &chart.title, cx, 28.0, 18.0, theme.title);
    }

    // Tick value labels along both axes
    let x_ticks = linspace(chart.x_axis.min, chart.x_axis.max, opts.grid_x_lines);
    let x_px = linspace(l as f64, r as f64, opts.grid_x_lines);
    for (v, px) in x_ticks.iter().zip(&x_px) {
        let label = format_tick(*v);
        let w = shaper.measure_width(&label, 12.0);
        shaper.draw_left(canvas, &label, *px as f32 - w * 0.5, b as f32 + 18.0, 12.0, theme.tick);
    }

    let y_ticks = linspace(chart.y_axis.min, chart.y_axis.max, opts.grid_y_lines);
    let y_px = linspace(b as f64, t as f64, opts.grid_y_lines);
    for (v, py) in y_ticks.iter().zip(&y_px) {
        let label = format_tick(*v);
        let w = shaper.measure_width(&label, 12.0);
        shaper.draw_left(canvas, &label, l as f32 - w - 8.0, *py as f32 + 4.0, 12.0, theme.tick);
    }

    // Axis labels: X centered below the ticks, Y above the vertical axis
    let x_label_cx = (l + r) as f32 * 0.5;
    shaper.draw_center(canvas, &chart.x_axis.label, x_label_cx, b as f32 + 40.0, 14.0, theme.axis_label);
    shaper.draw_left(canvas, &chart.y_axis.label, 8.0, t as f32 - 10.0, 14.0, theme.axis_label);
}

#[allow(clippy::too_many_arguments)]
fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    // Scale helpers
    let xspan = x_axis.span();
    let yspan = y_axis.span();
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx(x0), sy(y0)));

        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.line_stroke);

        canvas.draw_path(&path, &stroke);
    }

    // Markers sit on top of the polyline
    if series.marker == Marker::Circle {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.marker_fill);

        for &(x, y) in data {
            canvas.draw_circle((sx(x), sy(y)), 4.0, &fill);
        }
    }
}
