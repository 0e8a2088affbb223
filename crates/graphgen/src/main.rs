// File: crates/graphgen/src/main.rs
// Summary: Loads two-column sort benchmark results and renders the scaling chart to graph.png.

use anyhow::{Context, Result};
use graph_core::{Axis, Chart, RenderOptions, SampleSet};
use std::path::PathBuf;

// Fixed chart configuration; this utility takes no arguments.
const INPUT_PATH: &str = "sort_times_";
const OUTPUT_PATH: &str = "graph.png";
const FONT_PATH: &str = "/usr/share/fonts/truetype/crosextra/Carlito-Regular.ttf";
const X_LABEL: &str = "Dĺžka radenej postupnosti [B]";
const Y_LABEL: &str = "Čas [s]";
const LABEL_SIZE: f32 = 14.0;
const HEADER_SIZE: f32 = 26.0;
const Y_MARGIN: f64 = 0.05;

fn main() -> Result<()> {
    let samples = SampleSet::from_path(INPUT_PATH)
        .with_context(|| format!("failed to load '{INPUT_PATH}'"))?;
    println!("Loaded {} samples from {}", samples.len(), INPUT_PATH);

    let mut chart = Chart::with_samples(samples);
    chart.x_axis = Axis::benchmark_x(X_LABEL);
    chart.y_axis.label = Y_LABEL.to_string();
    chart.autoscale_y(Y_MARGIN);

    let opts = RenderOptions {
        label_size: LABEL_SIZE,
        title_size: HEADER_SIZE,
        font: Some(PathBuf::from(FONT_PATH)),
        ..RenderOptions::default()
    };
    chart.render_to_png(&opts, OUTPUT_PATH)?;
    println!("Wrote {OUTPUT_PATH}");
    Ok(())
}
