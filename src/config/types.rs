//! Configuration types for the timeclock engine.

use chrono::NaiveTime;
use serde::Deserialize;

use crate::calculation::{MINUTES_PER_DAY, minutes_since_midnight};
use crate::error::{EngineError, EngineResult};

/// Engine configuration: tolerance band, night window, and premium factor.
///
/// Every field has a statutory default, so `EngineConfig::default()` is a
/// fully working configuration and a YAML file only needs to name the fields
/// it overrides.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.tolerance_minutes, 10);
/// assert_eq!(config.night_start_minute(), 1320);
/// assert_eq!(config.night_end_minute(), 1740);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Width of the no-debit/no-credit band around the contracted duration.
    #[serde(default = "default_tolerance_minutes")]
    pub tolerance_minutes: i64,
    /// Time of day at which the night window opens.
    #[serde(default = "default_night_window_start")]
    pub night_window_start: String,
    /// Time of day (on the following day) at which the night window closes.
    #[serde(default = "default_night_window_end")]
    pub night_window_end: String,
    /// Numerator of the night-premium factor.
    #[serde(default = "default_premium_numerator")]
    pub premium_numerator: i64,
    /// Denominator of the night-premium factor.
    #[serde(default = "default_premium_denominator")]
    pub premium_denominator: i64,
}

fn default_tolerance_minutes() -> i64 {
    10
}

fn default_night_window_start() -> String {
    "22:00".to_string()
}

fn default_night_window_end() -> String {
    "05:00".to_string()
}

fn default_premium_numerator() -> i64 {
    8
}

fn default_premium_denominator() -> i64 {
    7
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance_minutes: default_tolerance_minutes(),
            night_window_start: default_night_window_start(),
            night_window_end: default_night_window_end(),
            premium_numerator: default_premium_numerator(),
            premium_denominator: default_premium_denominator(),
        }
    }
}

impl EngineConfig {
    /// The night-window open as a minute of the reference day (22:00 → 1320).
    pub fn night_start_minute(&self) -> i64 {
        minutes_since_midnight(&self.night_window_start)
    }

    /// The night-window close as an absolute minute on the following day
    /// (05:00 → 300 + 1440 = 1740).
    pub fn night_end_minute(&self) -> i64 {
        minutes_since_midnight(&self.night_window_end) + MINUTES_PER_DAY
    }

    /// Checks the configuration for semantically invalid values.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tolerance_minutes < 0 {
            return Err(EngineError::InvalidConfig {
                field: "tolerance_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.premium_numerator <= 0 {
            return Err(EngineError::InvalidConfig {
                field: "premium_numerator".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.premium_denominator <= 0 {
            return Err(EngineError::InvalidConfig {
                field: "premium_denominator".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Self::validate_time_of_day("night_window_start", &self.night_window_start)?;
        Self::validate_time_of_day("night_window_end", &self.night_window_end)?;
        Ok(())
    }

    fn validate_time_of_day(field: &str, value: &str) -> EngineResult<()> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .map(|_| ())
            .map_err(|_| EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("'{value}' is not a valid HH:mm time of day"),
            })
    }
}
