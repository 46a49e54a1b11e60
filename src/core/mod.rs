pub mod projection;
pub mod range;
pub mod slice;
pub mod types;

pub use projection::{
    ProjectedPoint, ProjectedSeries, build_polyline, project_points, project_series,
};
pub use range::{AvailableRanges, RangeKey, available_price_ranges, default_price_range};
pub use slice::slice_price_history;
pub use types::{ChartArea, PricePoint, closing_values, history_span_days};
