use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "Careline";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder rendered for absent or empty field values.
/// The view never shows an empty string or a literal "null".
pub const PLACEHOLDER: &str = "—";

/// Display format for timestamps, local time. Seconds are pinned to
/// zero: the view shows minute resolution only.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:00";

/// Rendered when a timestamp cannot be parsed as an ISO-8601 instant.
pub const INVALID_TIMESTAMP: &str = "Invalid Date";

/// Default request timeout for the timeline client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Initialize tracing for a consuming binary or test harness.
///
/// Reads `RUST_LOG` when set, otherwise falls back to
/// [`default_log_filter`]. Calling it more than once is harmless — later
/// calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init();
}
