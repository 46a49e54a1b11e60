//! Opt-in tracing setup for applications embedding `sparkline-rs`.
//!
//! The crate itself only emits `tracing` events; hosts that do not already
//! run a subscriber can enable the `telemetry` feature and call
//! `init_default_tracing` once at startup.

/// Installs a compact fmt `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` when initialization succeeds, `false` when the `telemetry`
/// feature is disabled or another global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
