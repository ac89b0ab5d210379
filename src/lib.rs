//! Daily Timeclock Engine
//!
//! This crate computes a worked-time summary for a single workday from a set
//! of clock-in/clock-out markings and a contracted duration: worked minutes,
//! overtime credit, shortfall debit, break time, and the statutory night
//! premium (22:00–05:00 at a factor of 8/7).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
