// File: crates/graph-core/tests/fixed_range.rs
// Purpose: The x axis stays pinned to [0, 1000000] no matter what the data does.

use graph_core::axis::X_MAX;
use graph_core::{Axis, Chart, LinearScale, SampleSet};
use std::io::Cursor;

#[test]
fn autoscale_never_moves_x() {
    // Data far outside the fixed range on both ends
    let samples =
        SampleSet::from_reader(Cursor::new(&b"-50 0.1\n2000000 9.5\n3000000 12.0\n"[..]))
            .unwrap();
    let mut chart = Chart::with_samples(samples);
    chart.x_axis = Axis::benchmark_x("Size");
    chart.autoscale_y(0.05);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, X_MAX);

    // y follows the data with a 5% pad on each end
    let span = 12.0 - 0.1;
    assert!((chart.y_axis.min - (0.1 - span * 0.05)).abs() < 1e-9);
    assert!((chart.y_axis.max - (12.0 + span * 0.05)).abs() < 1e-9);
}

#[test]
fn fixed_domain_maps_to_plot_edges() {
    let scale = LinearScale::new(64.0, 584.0, 0.0, X_MAX);
    assert_eq!(scale.to_px(0.0), 64.0);
    assert_eq!(scale.to_px(X_MAX), 584.0);

    // Values beyond the domain project beyond the plot edges; the renderer
    // clips them at the frame.
    assert!(scale.to_px(2.0 * X_MAX) > 584.0);
    assert!(scale.to_px(-1.0) < 64.0);

    // Round trip through the inverse
    let mid = scale.from_px(scale.to_px(500_000.0));
    assert!((mid - 500_000.0).abs() < 1e-3);
}

#[test]
fn autoscale_on_empty_samples_is_a_no_op() {
    let mut chart = Chart::new();
    let (y_min, y_max) = (chart.y_axis.min, chart.y_axis.max);
    chart.autoscale_y(0.05);
    assert_eq!(chart.y_axis.min, y_min);
    assert_eq!(chart.y_axis.max, y_max);
}

#[test]
fn autoscale_flat_series_opens_the_range() {
    let samples = SampleSet::from_reader(Cursor::new(&b"1 2.0\n2 2.0\n"[..])).unwrap();
    let mut chart = Chart::with_samples(samples);
    chart.autoscale_y(0.0);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
