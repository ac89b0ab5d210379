//! Request types for the Daily Timeclock Engine API.
//!
//! This module defines the JSON request structure for the `/timesheet`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/timesheet` endpoint.
///
/// Both fields may carry raw digit strings (`"0800"`); the handler runs the
/// clock-input normalization over them before computing, so callers do not
/// have to pre-format their input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The contracted duration for the day, as `HH:mm` or raw digits.
    pub contracted: String,
    /// The ordered clock-in/clock-out markings. Empty strings mark unset
    /// slots and are skipped.
    #[serde(default)]
    pub markings: Vec<String>,
}
