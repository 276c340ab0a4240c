//! Charting
//!
//! Series/axis computation and the canvas renderer that consumes it.

pub mod pipeline;
pub mod render;

pub use pipeline::{build_series, compute_robust_range, SeriesPoint, SeriesSet, ValueRange};
pub use render::{draw_chart, ACTUAL_COLOR, PROJECTED_COLOR};
