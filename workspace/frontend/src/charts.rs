//! Chart construction and the per-canvas chart registry.

pub mod registry;
pub mod specs;

pub use registry::{ChartHandle, ChartRegistry, ChartSurface};
pub use specs::{
    doughnut_chart, intake_bar_chart, time_series_chart, trend_chart, ChartSpec, ChartTrace,
    BAR_COLOR, PALETTE,
};
