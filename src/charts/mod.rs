mod chart;
mod kind;

pub use chart::Chart;
pub use kind::{CHART_VERSION, CHART_WRAP_TYPE, ChartKind, ChartMeta};
