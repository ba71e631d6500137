// File: crates/curve-core/src/view.rs
// Summary: Data extents of a set of series, used to derive axis ranges.

use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtent {
    /// Bounding box of all finite points, or `None` when there are none.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// X interval widened by `frac` of its span on both sides.
    /// A zero-width interval is widened by half a unit each way.
    pub fn padded_x(&self, frac: f64) -> (f64, f64) {
        pad(self.x_min, self.x_max, frac)
    }
}

fn pad(lo: f64, hi: f64, frac: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < 1e-9 {
        return (lo - 0.5, hi + 0.5);
    }
    let m = span * frac;
    (lo - m, hi + m)
}
