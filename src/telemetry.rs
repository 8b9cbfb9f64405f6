//! Tracing setup helpers for applications embedding `chartlet`.
//!
//! Setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] once at startup or install their own `tracing`
//! subscriber and filters before drawing.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Falls back to the `info` level when no environment filter is set. Returns
/// `false` without touching global state when the `telemetry` feature is off
/// or the host already installed a subscriber.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Feature-off stub; performs no initialization.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
