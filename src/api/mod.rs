//! HTTP API module for the Daily Timeclock Engine.
//!
//! This module provides the REST endpoint for computing a daily timesheet
//! from a contracted duration and a list of clock markings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TimesheetRequest;
pub use response::{ApiError, TimesheetResponse};
pub use state::AppState;
