// File: crates/graph-core/src/samples.rs
// Summary: Sample set model and the two-column benchmark file loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loader failure. Every variant is fatal to the run; malformed lines are
/// never skipped or zero-filled.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading input file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two columns, found {found}")]
    MissingColumn { line: usize, found: usize },
    #[error("line {line}: invalid input size")]
    ParseSize {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("line {line}: invalid elapsed time")]
    ParseTime {
        line: usize,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Parsed benchmark results: the i-th input size pairs with the i-th
/// elapsed time, in file order. Sizes need not be sorted or unique.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    sizes: Vec<i64>,
    times: Vec<f64>,
}

impl SampleSet {
    /// Load from a whitespace-delimited two-column file:
    /// `<integer size> <float seconds>` per line, no header. Tokens past the
    /// second are ignored; leading/trailing whitespace is tolerated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Same contract over any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LoadError> {
        let mut sizes = Vec::new();
        let mut times = Vec::new();

        for (idx, row) in reader.lines().enumerate() {
            let row = row?;
            let line = idx + 1;
            let mut tokens = row.split_whitespace();
            let (size, time) = match (tokens.next(), tokens.next()) {
                (Some(size), Some(time)) => (size, time),
                (first, _) => {
                    return Err(LoadError::MissingColumn {
                        line,
                        found: first.map_or(0, |_| 1),
                    })
                }
            };
            sizes.push(
                size.parse::<i64>()
                    .map_err(|source| LoadError::ParseSize { line, source })?,
            );
            times.push(
                time.parse::<f64>()
                    .map_err(|source| LoadError::ParseTime { line, source })?,
            );
        }

        Ok(Self { sizes, times })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Input sizes in file order.
    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    /// Elapsed times in file order; same length as `sizes`.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// (size, time) pairs as plot coordinates.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.sizes
            .iter()
            .zip(&self.times)
            .map(|(&s, &t)| (s as f64, t))
            .collect()
    }
}
