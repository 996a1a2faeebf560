//! Application identity and tuning constants.

use std::time::Duration;

/// Application display name.
pub const APP_NAME: &str = "Servizo";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long a view transition stays in flight before it lands.
///
/// Drives the perceived-latency loading indicator only; it is not a retry
/// or backoff interval.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(800);

/// Default map center when the user has not shared a location (Bengaluru).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (12.9716, 77.5946);
