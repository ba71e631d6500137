// File: crates/curve-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod dataset;
pub mod curve;

pub use chart::{Chart, RenderOptions};
pub use series::{Marker, Series};
pub use axis::{Axis, Ticks};
pub use view::DataExtent;
pub use theme::Theme;
pub use text::TextShaper;
pub use dataset::{Dataset, DatasetError, Observation};
pub use curve::accuracy_chart;
