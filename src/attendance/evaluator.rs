//! Shift status evaluation.
//!
//! This module classifies a day's check-in and check-out times against the
//! configured windows of the shift worked. Times are compared after being
//! anchored to a shared reference day; for the night shift the check-out and
//! the overtime threshold move to the following day.
//!
//! Only `checkInEnd` and `overtimeThreshold` take part in the classification.
//! `checkInStart`, `checkOutStart` and `checkOutEnd` are display values; a
//! check-out inside the "normal" window but past the overtime threshold is
//! still overtime.

use tracing::debug;

use crate::config::TimeSettings;
use crate::error::AttendanceResult;
use crate::models::{
    AttendanceStatus, CheckInStatus, CheckOutStatus, DayAnchor, Shift, parse_anchored,
};

/// Computes the attendance status for a shift given by its configuration key.
///
/// # Arguments
///
/// * `check_in_time` - Check-in time of day (`HH:MM` or `HH:MM:SS`)
/// * `check_out_time` - Check-out time of day (`HH:MM` or `HH:MM:SS`)
/// * `shift` - The shift's configuration key (e.g. "Pagi")
/// * `settings` - The time windows for every shift
///
/// # Returns
///
/// Returns the status pair, or an error if:
/// - `shift` is not a known shift (`InvalidShift`)
/// - any observed or configured time is malformed (`MalformedTime`)
///
/// # Examples
///
/// ```
/// use shift_attendance::attendance::evaluate;
/// use shift_attendance::config::TimeSettings;
/// use shift_attendance::models::{CheckInStatus, CheckOutStatus};
///
/// let settings = TimeSettings::default();
/// let status = evaluate("06:05:00", "14:35:00", "Pagi", &settings).unwrap();
/// assert_eq!(status.check_in_status, CheckInStatus::OnTime);
/// assert_eq!(status.check_out_status, CheckOutStatus::Overtime);
/// ```
pub fn evaluate(
    check_in_time: &str,
    check_out_time: &str,
    shift: &str,
    settings: &TimeSettings,
) -> AttendanceResult<AttendanceStatus> {
    let shift: Shift = shift.parse()?;
    evaluate_shift(check_in_time, check_out_time, shift, settings)
}

/// Computes the attendance status for an already-parsed shift.
///
/// See [`evaluate`] for the rules applied.
pub fn evaluate_shift(
    check_in_time: &str,
    check_out_time: &str,
    shift: Shift,
    settings: &TimeSettings,
) -> AttendanceResult<AttendanceStatus> {
    let windows = settings.for_shift(shift);

    let check_out_day = if shift.is_night() {
        DayAnchor::NextDay
    } else {
        DayAnchor::SameDay
    };

    let check_in = parse_anchored(check_in_time, DayAnchor::SameDay)?;
    let late_after = parse_anchored(&windows.check_in_end, DayAnchor::SameDay)?;
    let check_out = parse_anchored(check_out_time, check_out_day)?;
    let overtime_after = parse_anchored(&windows.overtime_threshold, check_out_day)?;

    let check_in_status = if check_in <= late_after {
        CheckInStatus::OnTime
    } else {
        CheckInStatus::Late
    };

    let check_out_status = if check_out > overtime_after {
        CheckOutStatus::Overtime
    } else {
        CheckOutStatus::OnTime
    };

    debug!(
        shift = %shift,
        check_in = check_in_time,
        check_out = check_out_time,
        check_in_status = %check_in_status,
        check_out_status = %check_out_status,
        "Evaluated attendance"
    );

    Ok(AttendanceStatus {
        check_in_status,
        check_out_status,
    })
}
