//! sparkline-rs: derivation core for lightweight inline price charts.
//!
//! Given a cached sequence of daily closing prices, this crate computes which
//! calendar display windows are worth offering, a sensible default window,
//! the windowed subsequence of points, and a normalized pixel-space polyline
//! with summary statistics. Everything is pure and synchronous; fetching,
//! theming, and date-locale formatting belong to the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartView, build_chart_view};
pub use error::{ChartError, ChartResult};
