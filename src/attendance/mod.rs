//! Attendance logic for the shift attendance engine.
//!
//! This module contains the status evaluator, window display helpers, the
//! inclusive range check, check-in/check-out submission rules and the
//! annotation and filtering of attendance records for the dashboard.

mod evaluator;
mod range;
mod records;
mod submission;
mod windows;

pub use evaluator::{evaluate, evaluate_shift};
pub use range::is_within_range;
pub use records::{AttendanceSummary, RecordQuery, annotate, filter_records, summarize};
pub use submission::{MIN_LOGBOOK_ENTRIES, validate_check_in, validate_check_out};
pub use windows::{ShiftWindows, describe_windows, format_time_range};
