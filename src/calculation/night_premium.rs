//! Night-premium calculation.
//!
//! Minutes worked inside the statutory night window (22:00 to 05:00 of the
//! following day) are credited at a premium factor of 8/7: seven real hours
//! of continuous night work produce eight credited hours, the "52:30 per
//! hour" rule.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EngineConfig;

/// Computes the premium-scaled minute count for one work interval.
///
/// `start` and `end` are absolute minutes in the same space produced by
/// rollover resolution, so the window close sits at `05:00 + 1440` when the
/// interval begins on the reference day. The interval is clipped to the
/// window and the overlap is scaled by the configured premium factor,
/// rounding half away from zero (half-up, since the value is non-negative).
///
/// This must be invoked once per work interval and the results summed: a
/// split shift can overlap the window independently in more than one
/// interval.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::night_premium;
/// use timeclock_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// // 22:00 to 23:00, fully inside the window: round(60 * 8/7) = 69
/// assert_eq!(night_premium(1320, 1380, &config), 69);
/// // 09:00 to 17:00, fully outside: 0
/// assert_eq!(night_premium(540, 1020, &config), 0);
/// ```
pub fn night_premium(start: i64, end: i64, config: &EngineConfig) -> i64 {
    let window_start = config.night_start_minute();
    let window_end = config.night_end_minute();

    if end <= window_start || start >= window_end {
        return 0;
    }

    let clipped_start = start.max(window_start);
    let clipped_end = end.min(window_end);
    let overlap = clipped_end - clipped_start;
    if overlap <= 0 {
        return 0;
    }

    let scaled = Decimal::from(overlap) * Decimal::from(config.premium_numerator)
        / Decimal::from(config.premium_denominator);
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
