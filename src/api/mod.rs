mod view_model;

pub use view_model::{ChartView, build_chart_view};
