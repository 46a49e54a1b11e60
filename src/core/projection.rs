use serde::{Deserialize, Serialize};

use crate::core::types::ChartArea;

/// Projected polyline vertex in pixel coordinates, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Render-ready series geometry plus summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub points: Vec<ProjectedPoint>,
    pub first_value: f64,
    pub last_value: f64,
    pub percent_change: f64,
    pub is_positive: bool,
}

impl ProjectedSeries {
    /// Formats the vertices as an SVG-style `"x,y x,y …"` point list.
    #[must_use]
    pub fn polyline_points(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 14);
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:.2},{:.2}", point.x, point.y));
        }
        out
    }
}

/// Projects a value sequence into normalized pixel-space vertices.
///
/// Fewer than two values produce no vertices (nothing to draw). X spreads the
/// points evenly across the usable width; Y normalizes against the value
/// extremes with the axis inverted, so a higher price sits higher on screen.
/// A flat series normalizes to 0.5 and renders as a mid-height line instead
/// of dividing by zero.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
#[must_use]
pub fn project_points(values: &[f64], area: ChartArea) -> Vec<ProjectedPoint> {
    if values.len() < 2 {
        return Vec::new();
    }

    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    for value in values {
        min_value = min_value.min(*value);
        max_value = max_value.max(*value);
    }
    let value_range = max_value - min_value;

    let padding = area.padding();
    let usable_width = area.usable_width();
    let usable_height = area.usable_height();
    let step = 1.0 / (values.len() - 1) as f64;

    let mut projected = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let x = padding + i as f64 * step * usable_width;
        let normalized = if value_range > 0.0 {
            (value - min_value) / value_range
        } else {
            0.5
        };
        let y = padding + (1.0 - normalized) * usable_height;
        projected.push(ProjectedPoint {
            x: round_coordinate(x),
            y: round_coordinate(y),
        });
    }

    projected
}

/// Projects values and derives the series summary statistics.
///
/// `percent_change` is defined as zero when the first value is not strictly
/// positive, so degenerate inputs never propagate `NaN` or infinities. Ties
/// count as positive.
#[must_use]
pub fn project_series(values: &[f64], area: ChartArea) -> ProjectedSeries {
    let first_value = values.first().copied().unwrap_or(0.0);
    let last_value = values.last().copied().unwrap_or(0.0);
    let percent_change = if first_value > 0.0 {
        (last_value - first_value) / first_value * 100.0
    } else {
        0.0
    };

    ProjectedSeries {
        points: project_points(values, area),
        first_value,
        last_value,
        percent_change,
        is_positive: percent_change >= 0.0,
    }
}

/// Convenience wrapper returning only the polyline point-list string.
#[must_use]
pub fn build_polyline(values: &[f64], area: ChartArea) -> String {
    project_series(values, area).polyline_points()
}

fn round_coordinate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
