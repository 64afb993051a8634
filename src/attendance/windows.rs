//! Display strings for a shift's time windows.

use serde::{Deserialize, Serialize};

use crate::config::TimeSettings;
use crate::error::AttendanceResult;

/// A shift's windows formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWindows {
    /// On-time check-in window, e.g. "06:00 - 06:15".
    pub check_in_range: String,
    /// Check-ins after this time are late.
    pub late_after: String,
    /// Normal check-out window, e.g. "14:00 - 14:30".
    pub normal_check_out_range: String,
    /// Check-outs after this time are overtime.
    pub overtime_after: String,
}

/// Formats a pair of times as a range.
///
/// ```
/// use shift_attendance::attendance::format_time_range;
///
/// assert_eq!(format_time_range("08:00", "08:15"), "08:00 - 08:15");
/// ```
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}

/// Projects a shift's configured windows into display strings.
///
/// Values are passed through as configured; nothing is parsed.
pub fn describe_windows(shift: &str, settings: &TimeSettings) -> AttendanceResult<ShiftWindows> {
    let windows = settings.lookup(shift)?;

    Ok(ShiftWindows {
        check_in_range: format_time_range(&windows.check_in_start, &windows.check_in_end),
        late_after: windows.check_in_end.clone(),
        normal_check_out_range: format_time_range(
            &windows.check_out_start,
            &windows.check_out_end,
        ),
        overtime_after: windows.overtime_threshold.clone(),
    })
}
