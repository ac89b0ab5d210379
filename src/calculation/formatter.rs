//! `HH:mm` result formatting.

/// Renders a non-negative minute count as a zero-padded `HH:mm` string.
///
/// Hours are unbounded above 23: durations are not wrapped at a day, so
/// 1500 minutes render as `"25:00"`.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(69), "01:09");
/// assert_eq!(format_minutes(1500), "25:00");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
