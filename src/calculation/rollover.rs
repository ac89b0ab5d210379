//! Midnight-rollover resolution for ordered marking lists.
//!
//! Markings are entered as times of day only. When a marking's clock value is
//! smaller than the one before it, the clock must have wrapped past midnight,
//! so every subsequent marking is shifted forward by a whole day.

use super::clock::{MINUTES_PER_DAY, minutes_since_midnight};

/// Resolves an ordered marking list into absolute minute offsets.
///
/// Empty entries are skipped, not emitted. A running reference-day counter
/// starts at 0 and is incremented whenever a marking's raw minute-of-day
/// value is smaller than the previous emitted marking's raw value; each
/// emitted offset is `raw + reference_day * 1440`.
///
/// The heuristic is strictly single-lookback: it compares only against the
/// immediately previous emitted marking, never a global maximum. A value
/// smaller than an even-earlier marking but larger than its immediate
/// predecessor does NOT trigger a rollover. This is the documented behavior
/// of the timeclock and must not be "fixed" to a global heuristic.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::resolve_rollover;
///
/// let markings = vec!["23:00".to_string(), "01:00".to_string()];
/// assert_eq!(resolve_rollover(&markings), vec![1380, 1500]);
/// ```
pub fn resolve_rollover(markings: &[String]) -> Vec<i64> {
    let mut resolved = Vec::with_capacity(markings.len());
    let mut reference_day: i64 = 0;
    let mut previous_raw: Option<i64> = None;

    for marking in markings {
        if marking.is_empty() {
            continue;
        }

        let raw = minutes_since_midnight(marking);
        if let Some(prev) = previous_raw {
            if raw < prev {
                reference_day += 1;
            }
        }

        resolved.push(raw + reference_day * MINUTES_PER_DAY);
        previous_raw = Some(raw);
    }

    resolved
}
