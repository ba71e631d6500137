// File: crates/curve-core/src/curve.rs
// Summary: Fixed "adaptation curve" recipe: accuracy over time steps as a marked line chart.

use crate::axis::{Axis, Ticks};
use crate::chart::Chart;
use crate::dataset::Dataset;
use crate::grid::{nice_ticks, stride_ticks};
use crate::series::{Marker, Series};
use crate::view::DataExtent;

pub const DEFAULT_INPUT: &str = "adaptation_data.csv";
pub const DEFAULT_OUTPUT: &str = "adaptation_curve.png";

pub const TITLE: &str = "Adaptation to Pattern Change";
pub const X_LABEL: &str = "Time Step";
pub const Y_LABEL: &str = "Prediction Accuracy (%)";

/// Accuracy axis range; leaves headroom above 100%.
pub const Y_RANGE: (f64, f64) = (0.0, 105.0);
/// Distance between x ticks, in time steps.
pub const X_TICK_STRIDE: f64 = 2.0;
/// Fraction of the data span added on each side of the x range.
pub const X_MARGIN: f64 = 0.05;
/// Time steps may run up to this multiple of the row count before the
/// fixed stride gives way to automatic ticks.
pub const ROW_BOUND_FACTOR: f64 = 4.0;
const X_AUTO_TICKS: usize = 8;

const MARKER_RADIUS: f32 = 4.0;
const LINE_WIDTH: f32 = 1.5;

/// X tick positions: every `X_TICK_STRIDE` steps from 0 up to the larger of
/// the row count and the largest time step.
///
/// When the largest time step exceeds `ROW_BOUND_FACTOR` times the row count,
/// or the stride would need too many ticks, "nice" ticks over the padded data
/// range are used instead.
pub fn x_ticks(dataset: &Dataset) -> Vec<f64> {
    let rows = dataset.len() as f64;
    let upper = match dataset.max_time_step() {
        Some(m) if m > rows * ROW_BOUND_FACTOR => return auto_x_ticks(dataset),
        Some(m) => m.max(rows),
        None => rows,
    };
    let ticks = stride_ticks(0.0, upper, X_TICK_STRIDE);
    if ticks.is_empty() { auto_x_ticks(dataset) } else { ticks }
}

fn auto_x_ticks(dataset: &Dataset) -> Vec<f64> {
    let (lo, hi) = x_data_range(dataset);
    nice_ticks(lo, hi, X_AUTO_TICKS)
}

fn x_data_range(dataset: &Dataset) -> (f64, f64) {
    DataExtent::from_series(&[Series::line(dataset.points())])
        .map(|e| e.padded_x(X_MARGIN))
        .unwrap_or((0.0, 1.0))
}

/// Build the chart for `dataset`. The dataset's row order is kept as the drawing order.
pub fn accuracy_chart(dataset: &Dataset) -> Chart {
    let ticks = x_ticks(dataset);
    let (x_min, x_max) = x_data_range(dataset);
    let series = Series::line(dataset.points())
        .with_stroke_width(LINE_WIDTH)
        .with_marker(Marker::Circle { radius: MARKER_RADIUS });

    let mut x_axis = Axis::new(X_LABEL, x_min, x_max).with_ticks(Ticks::Fixed(ticks));
    x_axis.include_ticks();
    let y_axis = Axis::new(Y_LABEL, Y_RANGE.0, Y_RANGE.1);
    log::debug!("x range [{}, {}], {} rows", x_axis.min, x_axis.max, dataset.len());

    let mut chart = Chart::new();
    chart.title = TITLE.to_string();
    chart.x_axis = x_axis;
    chart.y_axis = y_axis;
    chart.grid = true;
    chart.add_series(series);
    chart
}
