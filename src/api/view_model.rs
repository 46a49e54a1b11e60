use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AvailableRanges, ChartArea, PricePoint, ProjectedSeries, RangeKey, available_price_ranges,
    closing_values, default_price_range, project_series, slice_price_history,
};
use crate::error::ChartResult;

/// Render-ready payload for one chart invocation.
///
/// The presentation layer draws `series` as a polyline and formats
/// `start_date`/`end_date` with its own locale-aware formatter; this crate
/// never formats dates for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub available: AvailableRanges,
    pub selected: RangeKey,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub series: ProjectedSeries,
}

/// Derives the full render payload for a history and an optional prior range
/// selection.
///
/// Histories with fewer than two points yield `Ok(None)`: no chart is
/// meaningful, and the caller suppresses the visualization entirely. A
/// `requested` range that the fresh availability no longer offers is not an
/// error; selection falls back to the default for the new set, which covers
/// histories that shrank between invocations.
pub fn build_chart_view(
    history: &[PricePoint],
    requested: Option<RangeKey>,
    area: ChartArea,
) -> ChartResult<Option<ChartView>> {
    if history.len() < 2 {
        debug!(points = history.len(), "history too short, chart suppressed");
        return Ok(None);
    }

    let available = available_price_ranges(history);
    let selected = match requested {
        Some(key) if available.contains(&key) => key,
        Some(key) => {
            let fallback = default_price_range(&available);
            debug!(requested = %key, fallback = %fallback, "selected range no longer offered");
            fallback
        }
        None => default_price_range(&available),
    };

    let window = slice_price_history(history, selected);
    // The slicer always keeps the last point of a non-empty input.
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return Ok(None);
    };
    let start_date = first.date;
    let end_date = last.date;

    let values = closing_values(window)?;
    let series = project_series(&values, area);

    Ok(Some(ChartView {
        available,
        selected,
        start_date,
        end_date,
        series,
    }))
}
