// File: crates/curve-core/src/grid.rs
// Summary: Tick layout helpers (fixed stride and "nice" automatic ticks) and tick label formatting.

/// Upper limit on the number of ticks any layout helper produces.
pub const MAX_TICKS: usize = 1_000;

/// Ticks `start, start + step, ...` up to and including `end`.
/// Returns an empty vector when `step` is not positive, `end < start`,
/// or more than [`MAX_TICKS`] ticks would be needed.
pub fn stride_ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || end < start { return Vec::new(); }
    let Some(n) = tick_count(start, end, step) else { return Vec::new() };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Index of the last tick in `start..=end`, or `None` when it is not finite
/// or exceeds [`MAX_TICKS`].
fn tick_count(start: f64, end: f64, step: f64) -> Option<usize> {
    let n = ((end - start) / step + 1e-9).floor();
    if !n.is_finite() || n < 0.0 || n >= MAX_TICKS as f64 {
        return None;
    }
    Some(n as usize)
}

/// Roughly `target` ticks covering `[min, max]`, with a step of 1, 2, 2.5 or 5 x 10^k.
/// Only ticks inside the closed interval are returned.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() { return Vec::new(); }
    if (hi - lo).abs() < 1e-12 { return vec![lo]; }

    let raw = (hi - lo) / target.max(1) as f64;
    let step = nice_step(raw);
    let first = (lo / step).ceil() * step;
    if first > hi { return Vec::new(); }
    let Some(n) = tick_count(first, hi, step) else { return Vec::new() };
    // snap away floating noise such as 0.30000000000000004
    (0..=n).map(|i| round_to(first + step * i as f64, step)).collect()
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

fn round_to(v: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32 + 1;
    let f = 10f64.powi(decimals);
    let r = (v * f).round() / f;
    if r == 0.0 { 0.0 } else { r }
}

/// Format a tick value: integers without a fractional part, others with up to 3 decimals.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_inclusive() {
        assert_eq!(stride_ticks(0.0, 6.0, 2.0), vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(stride_ticks(0.0, 5.0, 2.0), vec![0.0, 2.0, 4.0]);
        assert_eq!(stride_ticks(0.0, 0.0, 2.0), vec![0.0]);
    }

    #[test]
    fn stride_rejects_bad_input() {
        assert!(stride_ticks(0.0, 10.0, 0.0).is_empty());
        assert!(stride_ticks(5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn stride_refuses_runaway_counts() {
        assert!(stride_ticks(0.0, 1e19, 2.0).is_empty());
        assert!(stride_ticks(0.0, 2e6, 2.0).is_empty());
        assert!(stride_ticks(0.0, f64::INFINITY, 2.0).is_empty());
        assert_eq!(stride_ticks(0.0, 1_000.0, 2.0).len(), 501);
    }

    #[test]
    fn nice_ticks_stay_bounded_at_large_magnitudes() {
        let t = nice_ticks(0.0, 1e19, 6);
        assert!(!t.is_empty() && t.len() <= 11);
        // span far below the float spacing at this magnitude
        assert!(nice_ticks(1e19 - 0.5, 1e19 + 0.5, 6).len() <= MAX_TICKS);
    }

    #[test]
    fn nice_ticks_for_percent_axis() {
        assert_eq!(nice_ticks(0.0, 105.0, 6), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn nice_ticks_fractional() {
        let t = nice_ticks(0.0, 1.0, 5);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn nice_ticks_negative_start() {
        let t = nice_ticks(-0.35, 6.35, 6);
        assert_eq!(t.first().copied(), Some(0.0));
        assert!(t.iter().all(|v| *v >= -0.35 && *v <= 6.35));
    }

    #[test]
    fn formats_ticks() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.125), "0.125");
    }
}
