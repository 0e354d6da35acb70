use crate::error::AppError;

use super::Report;
use super::banner::{CHECKS, TITLE};

impl Report {
    /// Render the report as a single JSON object
    pub(crate) fn to_json(&self) -> Result<String, AppError> {
        let output = serde_json::json!({
            "title": TITLE,
            "time": self.timestamp(),
            "timezone": self.timezone.to_string(),
            "runtime_version": self.runtime_version,
            "checks": CHECKS,
            "success": true,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
