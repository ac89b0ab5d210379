//! Clock-input normalization and minute conversion.
//!
//! This module provides the input-mask style normalization applied to every
//! keystroke of a time field (digits in, canonical `HH:mm` out) and the
//! conversion from a canonical time of day to minutes since midnight.

use chrono::{NaiveTime, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Normalizes a free-form time string toward canonical `HH:mm`.
///
/// The function:
/// 1. Strips every non-digit character.
/// 2. Truncates to at most 4 digits.
/// 3. Inserts a colon after the 2nd digit when more than 2 digits remain;
///    shorter inputs are left as digits-in-progress so incremental typing
///    is preserved.
/// 4. Discards the value entirely (returns the empty string) when the
///    colon-separated hours exceed 23 or minutes exceed 59.
///
/// The function is pure and idempotent: it is applied on every keystroke as
/// well as on final submission, so `normalize(normalize(x)) == normalize(x)`
/// must hold for every input.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::normalize_clock_input;
///
/// assert_eq!(normalize_clock_input("0930"), "09:30");
/// assert_eq!(normalize_clock_input("09:30"), "09:30");
/// assert_eq!(normalize_clock_input("9"), "9");
/// assert_eq!(normalize_clock_input("2460"), "");
/// ```
pub fn normalize_clock_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect();

    let value = if digits.len() > 2 {
        format!("{}:{}", &digits[..2], &digits[2..])
    } else {
        digits
    };

    if let Some((hours, minutes)) = value.split_once(':') {
        // Both halves are digit-only at this point.
        match (hours.parse::<u32>(), minutes.parse::<u32>()) {
            (Ok(h), Ok(m)) if h <= 23 && m <= 59 => value,
            _ => String::new(),
        }
    } else {
        value
    }
}

/// Converts a canonical `HH:mm` time of day to minutes since midnight.
///
/// Empty or unparseable input converts to 0 rather than an error; malformed
/// markings are soft-degraded, never rejected.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::minutes_since_midnight;
///
/// assert_eq!(minutes_since_midnight("08:00"), 480);
/// assert_eq!(minutes_since_midnight("23:59"), 1439);
/// assert_eq!(minutes_since_midnight(""), 0);
/// ```
pub fn minutes_since_midnight(time: &str) -> i64 {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|t| i64::from(t.hour()) * 60 + i64::from(t.minute()))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_four_digits_gain_a_colon() {
        assert_eq!(normalize_clock_input("0930"), "09:30");
        assert_eq!(normalize_clock_input("2359"), "23:59");
        assert_eq!(normalize_clock_input("0000"), "00:00");
    }

    #[test]
    fn test_non_digits_are_stripped() {
        assert_eq!(normalize_clock_input("09:30"), "09:30");
        assert_eq!(normalize_clock_input(" 0a9-3.0 "), "09:30");
    }

    #[test]
    fn test_input_is_truncated_to_four_digits() {
        assert_eq!(normalize_clock_input("093045"), "09:30");
        assert_eq!(normalize_clock_input("12345678"), "12:34");
    }

    #[test]
    fn test_short_input_stays_digits_in_progress() {
        assert_eq!(normalize_clock_input(""), "");
        assert_eq!(normalize_clock_input("9"), "9");
        assert_eq!(normalize_clock_input("09"), "09");
    }

    #[test]
    fn test_three_digits_keep_partial_minutes() {
        assert_eq!(normalize_clock_input("093"), "09:3");
    }

    #[test]
    fn test_out_of_range_input_is_discarded() {
        // Hours above 23
        assert_eq!(normalize_clock_input("2400"), "");
        assert_eq!(normalize_clock_input("9930"), "");
        // Minutes above 59
        assert_eq!(normalize_clock_input("0960"), "");
        assert_eq!(normalize_clock_input("2360"), "");
    }

    #[test]
    fn test_boundary_values_survive() {
        assert_eq!(normalize_clock_input("2359"), "23:59");
        assert_eq!(normalize_clock_input("0059"), "00:59");
    }

    proptest! {
        /// Normalization is idempotent for arbitrary input.
        #[test]
        fn prop_normalize_is_idempotent(raw in ".{0,16}") {
            let once = normalize_clock_input(&raw);
            let twice = normalize_clock_input(&once);
            prop_assert_eq!(once, twice);
        }

        /// Normalized output is either empty, bare digits, or a value whose
        /// colon-separated halves are in range.
        #[test]
        fn prop_normalize_output_is_well_formed(raw in ".{0,16}") {
            let value = normalize_clock_input(&raw);
            if let Some((hours, minutes)) = value.split_once(':') {
                let h: u32 = hours.parse().unwrap();
                prop_assert!(h <= 23);
                if minutes.len() == 2 {
                    let m: u32 = minutes.parse().unwrap();
                    prop_assert!(m <= 59);
                }
            } else {
                prop_assert!(value.chars().all(|c| c.is_ascii_digit()));
                prop_assert!(value.len() <= 2);
            }
        }
    }

    #[test]
    fn test_minutes_since_midnight_for_valid_times() {
        assert_eq!(minutes_since_midnight("00:00"), 0);
        assert_eq!(minutes_since_midnight("08:00"), 480);
        assert_eq!(minutes_since_midnight("22:00"), 1320);
        assert_eq!(minutes_since_midnight("23:59"), 1439);
    }

    #[test]
    fn test_minutes_since_midnight_degrades_to_zero() {
        assert_eq!(minutes_since_midnight(""), 0);
        assert_eq!(minutes_since_midnight("not a time"), 0);
        assert_eq!(minutes_since_midnight("25:00"), 0);
    }
}
