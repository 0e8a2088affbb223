// File: crates/graph-core/src/axis.rs
// Summary: Axis model with labels and ranges.

/// Upper bound of the fixed benchmark x range, in sorted-sequence bytes.
pub const X_MAX: f64 = 1_000_000.0;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// The benchmark x axis: always clipped to [0, 1000000] regardless of
    /// the data extent.
    pub fn benchmark_x(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, X_MAX)
    }

    pub fn default_x() -> Self {
        Self::benchmark_x("Size")
    }

    pub fn default_y() -> Self {
        Self::new("Time", 0.0, 1.0)
    }
}
