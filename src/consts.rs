/// Timestamp format for the banner and JSON output: "2025-01-15 09:30:00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the `=` separator lines framing the banner
pub(crate) const SEPARATOR_WIDTH: usize = 50;

/// Fallback value when the compiler version or target is unavailable
pub(crate) const UNKNOWN: &str = "unknown";
