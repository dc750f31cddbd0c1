// File: crates/ratechart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, repeatability, and vertex order.

use ratechart_core::{Axis, Chart, RenderOptions, Series};

fn opts_no_labels() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

fn chart_with(data: Vec<(f64, f64)>) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(data));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart_with(vec![(0.0, 0.0), (4.0, 4.0)]);

    let (px, w, h, stride) = chart.render_to_rgba8(&opts_no_labels()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn repeated_renders_are_identical() {
    let chart = chart_with(vec![(0.0, 0.0), (2.0, 3.0), (4.0, 1.0)]);
    let opts = opts_no_labels();

    let (first, ..) = chart.render_to_rgba8(&opts).expect("first render");
    let (second, ..) = chart.render_to_rgba8(&opts).expect("second render");
    assert_eq!(first, second, "render must not accumulate hidden state");
}

#[test]
fn vertex_order_changes_the_polyline() {
    // Same point set, different visit order: the connecting segments differ,
    // so the rasterized output must differ too.
    let in_order = chart_with(vec![(0.0, 0.0), (2.0, 4.0), (4.0, 0.0)]);
    let permuted = chart_with(vec![(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]);
    let opts = opts_no_labels();

    let (a, ..) = in_order.render_to_rgba8(&opts).expect("in-order render");
    let (b, ..) = permuted.render_to_rgba8(&opts).expect("permuted render");
    assert_ne!(a, b, "polyline must visit points in input order");
}
