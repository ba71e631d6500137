// File: crates/curve-core/src/scale.rs
// Summary: Linear data-to-pixel transform shared by the X and Y axes.

/// Maps a data interval `[min, max]` onto a pixel interval `[px_start, px_end]`.
///
/// For the Y axis pass `px_start = bottom` and `px_end = top` so that larger
/// values land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, min: f64, max: f64) -> Self {
        let mut s = Self { px_start, px_end, min, max };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.max - self.min;
        self.px_start + ((v - self.min) / span) as f32 * (self.px_end - self.px_start)
    }
}
