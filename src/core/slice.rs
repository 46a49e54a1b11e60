use chrono::Duration;

use crate::core::range::RangeKey;
use crate::core::types::PricePoint;

/// Returns the trailing subsequence of a history that falls inside a window.
///
/// `Max` returns the input unchanged. A standard key keeps every point whose
/// date is on or after the last point's date minus the window's calendar-day
/// length; a cutoff older than the first point keeps the whole history. The
/// result always includes the last point and is non-empty whenever the input
/// is.
#[must_use]
pub fn slice_price_history(history: &[PricePoint], key: RangeKey) -> &[PricePoint] {
    let Some(threshold) = key.threshold_days() else {
        return history;
    };
    let Some(last) = history.last() else {
        return history;
    };

    let cutoff = last.date - Duration::days(threshold);
    // History is sorted by date, so the window boundary is a partition point.
    let start = history.partition_point(|point| point.date < cutoff);
    &history[start..]
}
