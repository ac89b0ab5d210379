//! Configuration for the Daily Timeclock Engine.
//!
//! The statutory constants of the timeclock (tolerance band, night window,
//! premium factor) are configurable through a YAML file, with defaults that
//! match the statutory values.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
