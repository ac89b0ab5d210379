//! Timesheet result models.
//!
//! This module defines the per-day totals produced by the engine and their
//! display representation. A fresh `TimesheetTotals` is created on every
//! computation; no history is retained.

use serde::{Deserialize, Serialize};

use crate::calculation::format_minutes;

/// The six per-day totals of a timesheet computation, in minutes.
///
/// All fields are non-negative: shortfall and surplus are reported through
/// the separate `debit_minutes` and `credit_minutes` fields rather than a
/// signed difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetTotals {
    /// Total minutes worked across all intervals.
    pub worked_minutes: i64,
    /// Minutes short of the contracted duration, beyond the tolerance band.
    pub debit_minutes: i64,
    /// Minutes in excess of the contracted duration, beyond the tolerance band.
    pub credit_minutes: i64,
    /// Worked minutes capped at the contracted duration.
    pub normal_minutes: i64,
    /// Premium-scaled minutes worked inside the night window.
    pub night_premium_minutes: i64,
    /// Minutes of break between consecutive work intervals.
    pub break_minutes: i64,
}

impl TimesheetTotals {
    /// Renders every total as a zero-padded `HH:mm` display string.
    ///
    /// # Example
    ///
    /// ```
    /// use timeclock_engine::models::TimesheetTotals;
    ///
    /// let totals = TimesheetTotals {
    ///     worked_minutes: 480,
    ///     break_minutes: 60,
    ///     normal_minutes: 480,
    ///     ..Default::default()
    /// };
    /// let display = totals.formatted();
    /// assert_eq!(display.worked, "08:00");
    /// assert_eq!(display.breaks, "01:00");
    /// assert_eq!(display.debit, "00:00");
    /// ```
    pub fn formatted(&self) -> FormattedTimesheet {
        FormattedTimesheet {
            worked: format_minutes(self.worked_minutes),
            debit: format_minutes(self.debit_minutes),
            credit: format_minutes(self.credit_minutes),
            normal: format_minutes(self.normal_minutes),
            night_premium: format_minutes(self.night_premium_minutes),
            breaks: format_minutes(self.break_minutes),
        }
    }
}

/// The display form of [`TimesheetTotals`]: six `HH:mm` strings.
///
/// Hours are not wrapped at 24, so a 25-hour credit renders as `"25:00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTimesheet {
    /// Total worked time.
    pub worked: String,
    /// Shortfall against the contracted duration.
    pub debit: String,
    /// Surplus over the contracted duration.
    pub credit: String,
    /// Worked time capped at the contracted duration.
    pub normal: String,
    /// Premium-scaled night work.
    pub night_premium: String,
    /// Break time between intervals.
    pub breaks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let totals = TimesheetTotals::default();
        assert_eq!(totals.worked_minutes, 0);
        assert_eq!(totals.debit_minutes, 0);
        assert_eq!(totals.credit_minutes, 0);
        assert_eq!(totals.normal_minutes, 0);
        assert_eq!(totals.night_premium_minutes, 0);
        assert_eq!(totals.break_minutes, 0);
    }

    #[test]
    fn test_formatted_zero_pads_every_field() {
        let display = TimesheetTotals::default().formatted();
        assert_eq!(display.worked, "00:00");
        assert_eq!(display.debit, "00:00");
        assert_eq!(display.credit, "00:00");
        assert_eq!(display.normal, "00:00");
        assert_eq!(display.night_premium, "00:00");
        assert_eq!(display.breaks, "00:00");
    }

    #[test]
    fn test_formatted_does_not_wrap_hours() {
        let totals = TimesheetTotals {
            credit_minutes: 1500,
            ..Default::default()
        };
        assert_eq!(totals.formatted().credit, "25:00");
    }

    #[test]
    fn test_totals_serialization_round_trip() {
        let totals = TimesheetTotals {
            worked_minutes: 480,
            debit_minutes: 0,
            credit_minutes: 30,
            normal_minutes: 480,
            night_premium_minutes: 69,
            break_minutes: 60,
        };
        let json = serde_json::to_string(&totals).unwrap();
        let deserialized: TimesheetTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, deserialized);
    }

    #[test]
    fn test_formatted_serializes_as_strings() {
        let totals = TimesheetTotals {
            worked_minutes: 490,
            ..Default::default()
        };
        let json = serde_json::to_value(totals.formatted()).unwrap();
        assert_eq!(json["worked"], "08:10");
    }
}
