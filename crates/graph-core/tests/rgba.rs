// File: crates/graph-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use graph_core::{Axis, Chart, RenderOptions, SampleSet};
use std::io::Cursor;

#[test]
fn render_rgba8_buffer() {
    let samples = SampleSet::from_reader(Cursor::new(&b"0 0.0\n4 4.0\n"[..])).unwrap();
    let mut chart = Chart::with_samples(samples);
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Benchmark theme background is opaque white; check the top-left pixel (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
