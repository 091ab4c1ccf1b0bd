//! Startup gate for the splash screen.
//!
//! # Responsibility
//! - Hold the app in its splash state until a minimum display duration has
//!   elapsed, then report readiness to the polling UI thread.
//!
//! # Invariants
//! - Readiness is monotonic: once ready, a gate never becomes unready.
//! - The gate only computes; flipping the visible state is the UI's job.

use log::info;
use once_cell::sync::OnceCell;
use std::time::{Duration, Instant};

/// Minimum splash display time when no override is configured.
pub const DEFAULT_MIN_SPLASH_MS: u64 = 1500;

/// Environment override for the minimum splash duration, in milliseconds.
const SPLASH_MS_ENV: &str = "FAMHUB_SPLASH_MS";

static CONFIGURED_SPLASH_MS: OnceCell<u64> = OnceCell::new();

/// Returns the configured minimum splash duration in milliseconds.
///
/// Reads `FAMHUB_SPLASH_MS` once per process; unparsable values fall back to
/// the default.
pub fn configured_min_splash_ms() -> u64 {
    *CONFIGURED_SPLASH_MS
        .get_or_init(|| splash_ms_from(std::env::var(SPLASH_MS_ENV).ok().as_deref()))
}

/// Resolves the minimum splash duration from an optional override value.
///
/// Blank or unparsable overrides fall back to the default.
fn splash_ms_from(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MIN_SPLASH_MS)
}

/// Gate computing splash readiness from a start instant plus a minimum
/// display duration.
#[derive(Debug, Clone)]
pub struct SplashGate {
    started_at: Instant,
    minimum: Duration,
}

impl SplashGate {
    /// Starts a gate with an explicit minimum display duration.
    pub fn new(minimum: Duration) -> Self {
        info!(
            "event=splash_start module=bootstrap status=ok minimum_ms={}",
            minimum.as_millis()
        );
        Self {
            started_at: Instant::now(),
            minimum,
        }
    }

    /// Starts a gate with the configured (env-overridable) minimum.
    pub fn with_configured_minimum() -> Self {
        Self::new(Duration::from_millis(configured_min_splash_ms()))
    }

    /// Whether the minimum display duration has elapsed.
    pub fn is_ready(&self) -> bool {
        self.started_at.elapsed() >= self.minimum
    }

    /// Milliseconds until the gate opens; `0` once ready.
    pub fn remaining_ms(&self) -> u64 {
        self.minimum
            .saturating_sub(self.started_at.elapsed())
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::{splash_ms_from, SplashGate, DEFAULT_MIN_SPLASH_MS};
    use std::time::Duration;

    #[test]
    fn zero_minimum_is_immediately_ready() {
        let gate = SplashGate::new(Duration::ZERO);
        assert!(gate.is_ready());
        assert_eq!(gate.remaining_ms(), 0);
    }

    #[test]
    fn long_minimum_reports_remaining_time() {
        let gate = SplashGate::new(Duration::from_secs(3600));
        assert!(!gate.is_ready());
        let remaining = gate.remaining_ms();
        assert!(remaining > 0 && remaining <= 3_600_000);
    }

    #[test]
    fn default_minimum_is_positive() {
        assert!(DEFAULT_MIN_SPLASH_MS > 0);
    }

    #[test]
    fn splash_override_parses_or_falls_back() {
        assert_eq!(splash_ms_from(Some(" 250 ")), 250);
        assert_eq!(splash_ms_from(Some("soon")), DEFAULT_MIN_SPLASH_MS);
        assert_eq!(splash_ms_from(Some("")), DEFAULT_MIN_SPLASH_MS);
        assert_eq!(splash_ms_from(Some("-5")), DEFAULT_MIN_SPLASH_MS);
        assert_eq!(splash_ms_from(None), DEFAULT_MIN_SPLASH_MS);
    }
}
