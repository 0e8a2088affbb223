// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports sample loading and chart rendering.

pub mod chart;
pub mod samples;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use samples::{LoadError, SampleSet};
pub use axis::Axis;
pub use scale::LinearScale;
pub use theme::Theme;
pub use text::TextShaper;
