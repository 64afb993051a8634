//! Core data models for the shift attendance engine.
//!
//! This module contains the domain types shared by the evaluator, the
//! settings store and the API.

mod record;
mod shift;
mod status;
mod submission;
mod time_of_day;

pub use record::{AnnotatedRecord, AttendanceRecord, Role, Viewer};
pub use shift::Shift;
pub use status::{AttendanceStatus, CheckInStatus, CheckOutStatus};
pub use submission::{CheckInSubmission, CheckOutSubmission};
pub use time_of_day::{DayAnchor, anchor, parse_anchored, parse_time_of_day, reference_date};
