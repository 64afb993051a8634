//! Check-in and check-out submission rules.

use crate::config::AccessSettings;
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{CheckInSubmission, CheckOutSubmission, Shift};

/// Minimum number of logbook entries required at check-out.
pub const MIN_LOGBOOK_ENTRIES: usize = 2;

/// Validates a check-in against the access policy.
///
/// A shift must be chosen. When the policy requires photos, both the
/// attendance sheet photo and the selfie must be present and non-empty.
///
/// # Returns
///
/// Returns the chosen shift, or `InvalidSubmission` naming the first
/// missing field.
pub fn validate_check_in(
    submission: &CheckInSubmission,
    access: &AccessSettings,
) -> AttendanceResult<Shift> {
    let shift = submission.shift.ok_or_else(|| invalid("shift", "a shift must be selected"))?;

    if access.require_photo_for_check_in {
        if !has_photo(submission.attendance_sheet_photo.as_deref()) {
            return Err(invalid(
                "attendanceSheetPhoto",
                "a photo of the attendance sheet is required",
            ));
        }
        if !has_photo(submission.selfie_photo.as_deref()) {
            return Err(invalid("selfiePhoto", "a selfie is required"));
        }
    }

    Ok(shift)
}

/// Validates a check-out logbook.
///
/// The logbook needs at least [`MIN_LOGBOOK_ENTRIES`] entries and none of
/// them may be blank.
pub fn validate_check_out(submission: &CheckOutSubmission) -> AttendanceResult<()> {
    if submission.logbook.len() < MIN_LOGBOOK_ENTRIES {
        return Err(invalid(
            "logbook",
            &format!("at least {} entries are required", MIN_LOGBOOK_ENTRIES),
        ));
    }

    if let Some(index) = submission
        .logbook
        .iter()
        .position(|entry| entry.trim().is_empty())
    {
        return Err(invalid(
            "logbook",
            &format!("entry {} is empty; every entry must be filled in", index + 1),
        ));
    }

    Ok(())
}

fn has_photo(photo: Option<&str>) -> bool {
    photo.is_some_and(|p| !p.trim().is_empty())
}

fn invalid(field: &str, message: &str) -> AttendanceError {
    AttendanceError::InvalidSubmission {
        field: field.to_string(),
        message: message.to_string(),
    }
}
