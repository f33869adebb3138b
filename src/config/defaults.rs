//! Default configuration values.

/// Base URL items are served under when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// How long a status message stays visible, in milliseconds.
pub const DEFAULT_STATUS_CLEAR_MS: u64 = 1500;

/// Number of posts the demo feed renders.
pub const DEFAULT_FEED_ITEMS: usize = 12;

/// Allowed range for `ui.status_clear_ms`.
pub const STATUS_CLEAR_MS_RANGE: std::ops::RangeInclusive<u64> = 100..=60_000;

/// Allowed range for `ui.feed_items`.
pub const FEED_ITEMS_RANGE: std::ops::RangeInclusive<usize> = 1..=500;
