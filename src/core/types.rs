use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One daily closing price.
///
/// A price history is a slice of these, strictly increasing by date with no
/// duplicate dates. That ordering is an input invariant owned by the price
/// cache that supplies the history; it is not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    #[must_use]
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// Drawing-area geometry for the inline chart: outer dimensions plus the
/// inner padding subtracted from every side before projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    width: f64,
    height: f64,
    padding: f64,
}

impl ChartArea {
    pub fn new(width: f64, height: f64, padding: f64) -> ChartResult<Self> {
        let valid = width.is_finite()
            && height.is_finite()
            && padding.is_finite()
            && width > 0.0
            && height > 0.0
            && padding >= 0.0
            && 2.0 * padding < width
            && 2.0 * padding < height;

        if !valid {
            return Err(ChartError::InvalidArea {
                width,
                height,
                padding,
            });
        }

        Ok(Self {
            width,
            height,
            padding,
        })
    }

    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    /// Horizontal extent left after subtracting padding on both sides.
    #[must_use]
    pub fn usable_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Vertical extent left after subtracting padding on both sides.
    #[must_use]
    pub fn usable_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

/// Calendar-day distance between the first and last point of a history.
///
/// Pure calendar arithmetic on timezone-free dates, so there is no
/// off-by-one-day drift at window boundaries. Histories with fewer than two
/// points span zero days.
#[must_use]
pub fn history_span_days(history: &[PricePoint]) -> i64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) => (last.date - first.date).num_days(),
        _ => 0,
    }
}

/// Extracts closing prices as `f64` values for projection.
pub fn closing_values(history: &[PricePoint]) -> ChartResult<Vec<f64>> {
    history
        .iter()
        .map(|point| {
            point.close.to_f64().ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "close price on {} cannot be represented as f64",
                    point.date
                ))
            })
        })
        .collect()
}
