// File: crates/graph-core/src/scale.rs
// Summary: Linear value-to-pixel transform shared by grid, series, and ticks.

/// Maps a value range onto a pixel range. `px_a` pairs with `v_min` and
/// `px_b` with `v_max`, so an inverted pixel range (bottom above top) flips
/// the axis the way a y axis needs.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    px_a: f32,
    px_b: f32,
    v_min: f64,
    v_max: f64,
}

impl LinearScale {
    pub fn new(px_a: f32, px_b: f32, v_min: f64, v_max: f64) -> Self {
        let mut s = Self { px_a, px_b, v_min, v_max };
        if (s.v_max - s.v_min).abs() < 1e-12 {
            s.v_max = s.v_min + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.v_max - self.v_min).max(1e-12);
        self.px_a + ((v - self.v_min) / span) as f32 * (self.px_b - self.px_a)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let px_span = self.px_b - self.px_a;
        let frac = if px_span.abs() < 1e-6 { 0.0 } else { (px - self.px_a) / px_span };
        self.v_min + frac as f64 * (self.v_max - self.v_min)
    }
}
