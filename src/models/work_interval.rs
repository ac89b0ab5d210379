//! Work interval model.
//!
//! A work interval is one clock-in/clock-out pair expressed in absolute
//! minutes since the start of the reference day. Markings past midnight are
//! shifted by whole days during rollover resolution, so an interval can
//! legitimately extend beyond minute 1440.

use serde::{Deserialize, Serialize};

/// A single paired clock-in/clock-out span in absolute minutes.
///
/// Invariant: `end >= start` after rollover correction.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::WorkInterval;
///
/// // 23:00 to 01:00 the next day
/// let interval = WorkInterval { start: 1380, end: 1500 };
/// assert_eq!(interval.duration_minutes(), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// Start of the interval, minutes since the start of the reference day.
    pub start: i64,
    /// End of the interval, minutes since the start of the reference day.
    pub end: i64,
}

impl WorkInterval {
    /// Returns the worked duration of this interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Returns the break length between this interval and the next one.
    ///
    /// Overlapping or touching intervals yield 0, never a negative break.
    pub fn gap_until(&self, next: &WorkInterval) -> i64 {
        (next.start - self.end).max(0)
    }
}
