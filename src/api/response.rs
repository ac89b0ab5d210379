//! Response types for the Daily Timeclock Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::{FormattedTimesheet, TimesheetTotals};

/// Success response for the `/timesheet` endpoint.
///
/// Carries both the raw minute totals and their `HH:mm` display form, so
/// clients can render directly or do their own arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetResponse {
    /// The raw per-day totals in minutes.
    pub totals: TimesheetTotals,
    /// The same totals rendered as zero-padded `HH:mm` strings.
    pub display: FormattedTimesheet,
}

impl From<TimesheetTotals> for TimesheetResponse {
    fn from(totals: TimesheetTotals) -> Self {
        Self {
            display: totals.formatted(),
            totals,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_response_carries_both_representations() {
        let totals = TimesheetTotals {
            worked_minutes: 480,
            normal_minutes: 480,
            break_minutes: 60,
            ..Default::default()
        };
        let response: TimesheetResponse = totals.into();
        assert_eq!(response.totals.worked_minutes, 480);
        assert_eq!(response.display.worked, "08:00");
        assert_eq!(response.display.breaks, "01:00");
    }

    #[test]
    fn test_response_serialization_shape() {
        let response: TimesheetResponse = TimesheetTotals::default().into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totals"]["worked_minutes"], 0);
        assert_eq!(json["display"]["worked"], "00:00");
    }
}
