// File: crates/graph-core/src/text.rs
// Summary: Label typeface handling; loads a TTF from disk for non-ASCII axis text.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use std::path::Path;

/// Holds the typeface used for every label on the chart. A file-backed
/// typeface is required for localized (non-ASCII) axis text; the system
/// default exists for label-free or test renders.
pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    /// Load a typeface from a font file. Fails if the file is missing or the
    /// data is not a decodable font.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading font file '{}'", path.display()))?;
        let typeface = skia::FontMgr::new()
            .new_from_data(&bytes, None)
            .ok_or_else(|| anyhow!("font file '{}' is not a usable typeface", path.display()))?;
        Ok(Self { typeface: Some(typeface) })
    }

    /// Skia's default typeface. Glyph coverage is platform-dependent.
    pub fn system() -> Self {
        Self { typeface: None }
    }

    pub fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size.max(1.0)),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size.max(1.0));
                font
            }
        }
    }

    /// Advance width of `text` at `size`, in pixels.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        self.font(size).measure_str(text, None).0
    }
}
