//! Status banner
//!
//! Nine lines framed by separators: title, timestamp, toolchain version and
//! the fixed pipeline confirmations.

use std::io::{self, Write};

use chrono::{DateTime, FixedOffset};

use crate::consts::{SEPARATOR_WIDTH, TIMESTAMP_FORMAT};
use crate::utils::{Timezone, runtime_version};

pub(super) const TITLE: &str = "Archive Processing Demo";

/// Confirmations printed after the version line, in order
pub(super) const CHECKS: [&str; 3] = [
    "Archive extraction successful!",
    "Dockerfile execution successful!",
    "Application running successfully!",
];

const TITLE_ICON: &str = "🚀";
const TIME_ICON: &str = "⏰";
const VERSION_ICON: &str = "🦀";
const CHECK_ICON: &str = "✅";

pub(crate) struct Report {
    pub(super) time: DateTime<FixedOffset>,
    pub(super) timezone: Timezone,
    pub(super) runtime_version: String,
}

impl Report {
    /// Read the clock and toolchain version once for this invocation
    pub(crate) fn capture(timezone: Timezone) -> Self {
        Report {
            time: timezone.now(),
            timezone,
            runtime_version: runtime_version(),
        }
    }

    pub(super) fn timestamp(&self) -> String {
        self.time.format(TIMESTAMP_FORMAT).to_string()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut lines = vec![
            separator.clone(),
            format!("{TITLE_ICON} {TITLE}"),
            separator.clone(),
            format!("{TIME_ICON} Time: {}", self.timestamp()),
            format!("{VERSION_ICON} Rust Version: {}", self.runtime_version),
        ];
        lines.extend(CHECKS.iter().map(|check| format!("{CHECK_ICON} {check}")));
        lines.push(separator);
        lines
    }

    pub(crate) fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(in crate::report) fn fixed_report() -> Report {
        let utc = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let timezone = Timezone::Named(chrono_tz::UTC);
        Report {
            time: timezone.at(utc),
            timezone,
            runtime_version: "rustc 1.88.0 (6b00bc388 2025-06-23) [x86_64-unknown-linux-gnu]"
                .to_string(),
        }
    }

    #[test]
    fn banner_has_nine_lines_in_order() {
        let lines = fixed_report().lines();
        let sep = "=".repeat(50);
        assert_eq!(
            lines,
            vec![
                sep.clone(),
                "🚀 Archive Processing Demo".to_string(),
                sep.clone(),
                "⏰ Time: 2026-03-04 05:06:07".to_string(),
                "🦀 Rust Version: rustc 1.88.0 (6b00bc388 2025-06-23) [x86_64-unknown-linux-gnu]"
                    .to_string(),
                "✅ Archive extraction successful!".to_string(),
                "✅ Dockerfile execution successful!".to_string(),
                "✅ Application running successfully!".to_string(),
                sep,
            ]
        );
    }

    #[test]
    fn timestamp_follows_timezone() {
        let utc = Utc.with_ymd_and_hms(2026, 1, 1, 23, 30, 0).unwrap();
        let timezone = Timezone::Named(chrono_tz::Asia::Tokyo);
        let report = Report {
            time: timezone.at(utc),
            timezone,
            runtime_version: "rustc".to_string(),
        };
        // Tokyo is UTC+9, so the date rolls over
        assert_eq!(report.timestamp(), "2026-01-02 08:30:00");
    }

    #[test]
    fn write_to_terminates_every_line() {
        let mut buf = Vec::new();
        fixed_report().write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.matches(&"=".repeat(50)).count(), 3);
    }

    #[test]
    fn captured_report_has_version() {
        let report = Report::capture(Timezone::Local);
        assert!(!report.runtime_version.is_empty());
        assert_eq!(report.timestamp().len(), "YYYY-MM-DD HH:MM:SS".len());
    }
}
