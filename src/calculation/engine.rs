//! The timesheet engine.
//!
//! Orchestrates rollover resolution, interval pairing, worked-time and break
//! summation, night-premium accumulation, and the tolerance-band
//! reconciliation against the contracted duration.

use crate::config::EngineConfig;
use crate::models::{TimesheetTotals, WorkInterval};

use super::clock::{MINUTES_PER_DAY, minutes_since_midnight};
use super::night_premium::night_premium;
use super::rollover::resolve_rollover;

/// Computes the daily timesheet totals for a contracted duration and an
/// ordered marking list.
///
/// Each entry of `markings` is expected to be either a canonical `HH:mm`
/// time of day or the empty string; empty and malformed entries are skipped.
/// The function is total: it never errors, it degrades. An empty contracted
/// duration counts as 0 contracted minutes, so any logged work becomes
/// credit.
///
/// The steps, in order:
/// 1. Convert `contracted` to minutes (a duration, so no rollover applies).
/// 2. Resolve `markings` into absolute minutes across midnight rollovers.
/// 3. Pair consecutive offsets into work intervals; an unpaired trailing
///    entry is ignored and contributes neither work nor break.
/// 4. Sum worked minutes and per-interval night premium.
/// 5. Sum the gaps between adjacent intervals as break minutes.
/// 6. Reconcile against the contracted duration inside the tolerance band.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::compute_timesheet;
/// use timeclock_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// let markings: Vec<String> = ["08:00", "12:00", "13:00", "17:00"]
///     .iter()
///     .map(|m| m.to_string())
///     .collect();
/// let totals = compute_timesheet("08:00", &markings, &config);
/// assert_eq!(totals.worked_minutes, 480);
/// assert_eq!(totals.break_minutes, 60);
/// assert_eq!(totals.credit_minutes, 0);
/// assert_eq!(totals.debit_minutes, 0);
/// ```
pub fn compute_timesheet(
    contracted: &str,
    markings: &[String],
    config: &EngineConfig,
) -> TimesheetTotals {
    let contracted_minutes = minutes_since_midnight(contracted);
    let resolved = resolve_rollover(markings);
    let intervals = pair_intervals(&resolved);

    let mut worked_minutes: i64 = 0;
    let mut night_premium_minutes: i64 = 0;

    for interval in &intervals {
        worked_minutes += interval.duration_minutes();
        night_premium_minutes += night_premium(interval.start, interval.end, config);
    }

    let break_minutes: i64 = intervals
        .windows(2)
        .map(|pair| pair[0].gap_until(&pair[1]))
        .sum();

    // Floor at zero; rollover correction keeps intervals non-negative, but a
    // degraded input must never surface a negative total.
    let worked_minutes = worked_minutes.max(0);
    let night_premium_minutes = night_premium_minutes.max(0);

    let normal_minutes = worked_minutes.min(contracted_minutes);
    let diff = worked_minutes - contracted_minutes;

    let mut debit_minutes = 0;
    let mut credit_minutes = 0;
    if diff > config.tolerance_minutes {
        credit_minutes = diff;
    } else if diff < -config.tolerance_minutes {
        debit_minutes = diff.abs();
    }

    TimesheetTotals {
        worked_minutes,
        debit_minutes,
        credit_minutes,
        normal_minutes,
        night_premium_minutes,
        break_minutes,
    }
}

/// Pairs consecutive absolute-minute offsets into work intervals.
///
/// Offsets pair at indices (0,1), (2,3), …; a trailing unpaired offset is
/// dropped. Rollover resolution already orders each pair, but an `end`
/// smaller than its `start` is shifted by one day here as a second safety
/// net.
fn pair_intervals(resolved: &[i64]) -> Vec<WorkInterval> {
    resolved
        .chunks_exact(2)
        .map(|pair| {
            let start = pair[0];
            let mut end = pair[1];
            if end < start {
                end += MINUTES_PER_DAY;
            }
            WorkInterval { start, end }
        })
        .collect()
}
