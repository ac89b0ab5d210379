//! Calculation logic for the Daily Timeclock Engine.
//!
//! This module contains all the calculation functions for producing a daily
//! timesheet: clock-input normalization, conversion of times of day to
//! minutes, midnight-rollover resolution, night-premium calculation, the
//! timesheet engine that reconciles worked time against the contracted
//! duration, and `HH:mm` result formatting.

mod clock;
mod engine;
mod formatter;
mod night_premium;
mod rollover;

pub use clock::{MINUTES_PER_DAY, minutes_since_midnight, normalize_clock_input};
pub use engine::compute_timesheet;
pub use formatter::format_minutes;
pub use night_premium::night_premium;
pub use rollover::resolve_rollover;
