//! Data models for the Daily Timeclock Engine.
//!
//! This module contains the core data structures used throughout the engine:
//! work intervals in absolute minutes and the per-day timesheet totals.

mod timesheet;
mod work_interval;

pub use timesheet::{FormattedTimesheet, TimesheetTotals};
pub use work_interval::WorkInterval;
