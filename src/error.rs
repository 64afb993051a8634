//! Error types for the shift attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the evaluator, the settings store and the API can hit.

use thiserror::Error;

/// The main error type for the shift attendance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_attendance::error::AttendanceError;
///
/// let error = AttendanceError::InvalidShift {
///     shift: "Unknown".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid shift: Unknown");
/// ```
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// A time-of-day string was not in `HH:MM` or `HH:MM:SS` form.
    #[error("Malformed time '{value}': {message}")]
    MalformedTime {
        /// The offending input.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The shift name is not one of the configured shifts.
    #[error("Invalid shift: {shift}")]
    InvalidShift {
        /// The shift name that was not recognised.
        shift: String,
    },

    /// A shift's time windows are inconsistent.
    #[error("Invalid settings for shift '{shift}': {message}")]
    InvalidSettings {
        /// The shift whose settings are invalid.
        shift: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// A check-in or check-out submission is incomplete.
    #[error("Invalid submission field '{field}': {message}")]
    InvalidSubmission {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The viewer's role is not allowed to use the requested feature.
    #[error("Access denied for user '{user_id}': {message}")]
    AccessDenied {
        /// The viewer that was turned away.
        user_id: String,
        /// Which policy denied the request.
        message: String,
    },

    /// A settings file could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// A settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A settings file could not be written.
    #[error("Failed to write configuration file '{path}': {message}")]
    ConfigWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },
}

/// A type alias for Results that return AttendanceError.
pub type AttendanceResult<T> = Result<T, AttendanceError>;
