// File: crates/graph-core/src/theme.rs
// Summary: Color sets for chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
}

impl Theme {
    /// The benchmark chart preset: white background, translucent black
    /// major grid (alpha ~0.3), pure blue series stroke.
    pub fn benchmark() -> Self {
        Self {
            name: "benchmark",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 0, 0, 0),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0, 0, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(77, 235, 235, 245),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::benchmark()
    }
}
