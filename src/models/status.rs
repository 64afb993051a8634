//! Attendance status labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Timeliness of a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckInStatus {
    /// Checked in at or before the late threshold.
    OnTime,
    /// Checked in after the late threshold.
    Late,
}

/// Condition of a check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckOutStatus {
    /// Checked out at or before the overtime threshold.
    OnTime,
    /// Checked out after the overtime threshold.
    Overtime,
}

impl CheckInStatus {
    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CheckInStatus::OnTime => "on-time",
            CheckInStatus::Late => "late",
        }
    }
}

impl CheckOutStatus {
    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CheckOutStatus::OnTime => "on-time",
            CheckOutStatus::Overtime => "overtime",
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CheckOutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pair of labels computed for one day's attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatus {
    /// Whether the check-in was on time.
    pub check_in_status: CheckInStatus,
    /// Whether the check-out ran into overtime.
    pub check_out_status: CheckOutStatus,
}
