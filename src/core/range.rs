use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::types::{PricePoint, history_span_days};

/// Named trailing display window.
///
/// Standard windows are calendar-day approximations of 1/3/6/12 months;
/// `Max` spans the entire history. Derived ordering is ascending window size
/// with `Max` largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RangeKey {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "MAX")]
    Max,
}

/// Standard windows in ascending size, `Max` excluded.
const STANDARD_KEYS: [RangeKey; 4] = [
    RangeKey::OneMonth,
    RangeKey::ThreeMonths,
    RangeKey::SixMonths,
    RangeKey::OneYear,
];

impl RangeKey {
    /// Trailing window length in calendar days; `None` for `Max`.
    #[must_use]
    pub fn threshold_days(self) -> Option<i64> {
        match self {
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(91),
            Self::SixMonths => Some(182),
            Self::OneYear => Some(365),
            Self::Max => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::Max => "MAX",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered subset of offerable windows, smallest first, `Max` last.
pub type AvailableRanges = SmallVec<[RangeKey; 5]>;

/// Determines which display windows are meaningful for a history.
///
/// A standard window is offered when the history spans at least that many
/// calendar days. `Max` is offered when no standard window qualifies, or when
/// there is strictly more history than the widest standard window covers.
/// A span of exactly 365 days therefore offers `1Y` but not `Max`.
#[must_use]
pub fn available_price_ranges(history: &[PricePoint]) -> AvailableRanges {
    let span = history_span_days(history);

    let mut available: AvailableRanges = STANDARD_KEYS
        .into_iter()
        .filter(|key| {
            key.threshold_days()
                .is_some_and(|threshold| span >= threshold)
        })
        .collect();

    // Strictly-greater: an exact 1Y span has no extra history for MAX to show.
    let has_older_data = STANDARD_KEYS
        .last()
        .and_then(|key| key.threshold_days())
        .is_some_and(|widest| span > widest);
    if available.is_empty() || has_older_data {
        available.push(RangeKey::Max);
    }

    available
}

/// Picks the default window from an availability set.
///
/// Prefers `3M` when offered, otherwise the largest window present. An empty
/// set degrades to `Max` so the function stays total.
#[must_use]
pub fn default_price_range(available: &[RangeKey]) -> RangeKey {
    if available.contains(&RangeKey::ThreeMonths) {
        return RangeKey::ThreeMonths;
    }

    available.iter().copied().max().unwrap_or(RangeKey::Max)
}
