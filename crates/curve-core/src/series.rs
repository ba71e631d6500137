// File: crates/curve-core/src/series.rs
// Summary: Series model for a connected XY line with optional point markers.

/// Marker drawn at every data point of a line series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Marker {
    #[default]
    None,
    /// Filled circle with the given radius in pixels.
    Circle { radius: f32 },
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Points in draw order; the line connects them exactly in this order.
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
    pub marker: Marker,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, stroke_width: 1.5, marker: Marker::None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Points with finite coordinates, still in draw order.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}
