// File: crates/curve-core/src/axis.rs
// Summary: Axis model with label, range and tick policy.

use crate::grid::nice_ticks;

/// How tick positions along an axis are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Roughly `target` evenly spaced "nice" ticks inside the axis range.
    Auto { target: usize },
    /// Exactly these positions (those outside the axis range are not drawn).
    Fixed(Vec<f64>),
}

impl Default for Ticks {
    fn default() -> Self { Ticks::Auto { target: 6 } }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Ticks::default() }
    }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self { Self::new("X", 0.0, 10.0) }

    pub fn default_y() -> Self { Self::new("Y", 0.0, 100.0) }

    /// Grow the range so that every fixed tick is visible.
    pub fn include_ticks(&mut self) {
        if let Ticks::Fixed(ticks) = &self.ticks {
            for &t in ticks {
                self.min = self.min.min(t);
                self.max = self.max.max(t);
            }
        }
    }

    /// Tick positions that fall inside `[min, max]`, in ascending order.
    pub fn tick_values(&self) -> Vec<f64> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        let eps = (hi - lo).abs() * 1e-9;
        match &self.ticks {
            Ticks::Auto { target } => nice_ticks(lo, hi, *target),
            Ticks::Fixed(values) => {
                let mut v: Vec<f64> = values
                    .iter()
                    .copied()
                    .filter(|t| t.is_finite() && *t >= lo - eps && *t <= hi + eps)
                    .collect();
                v.sort_by(|a, b| a.total_cmp(b));
                v
            }
        }
    }
}
