//! Attendance records and the people viewing them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::shift::Shift;
use super::status::AttendanceStatus;

/// One employee's attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Record identifier.
    pub id: String,
    /// The employee the record belongs to.
    pub user_id: String,
    /// The employee's display name.
    pub name: String,
    /// The day the shift started.
    pub date: NaiveDate,
    /// The shift worked.
    pub shift: Shift,
    /// Check-in time as entered (`HH:MM` or `HH:MM:SS`).
    pub check_in_time: String,
    /// Check-out time as entered (`HH:MM` or `HH:MM:SS`).
    pub check_out_time: String,
    /// Reference to the captured attendance sheet photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_sheet_photo: Option<String>,
    /// Reference to the captured selfie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie_photo: Option<String>,
    /// Activities logged at check-out.
    #[serde(default)]
    pub logbook: Vec<String>,
}

/// A record together with its computed status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRecord {
    /// The underlying record.
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// Status computed from the current time settings.
    #[serde(flatten)]
    pub status: AttendanceStatus,
}

/// The role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator, sees every record.
    Admin,
    /// Regular employee.
    User,
}

/// The user a record listing is produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    /// The viewer's user id.
    pub user_id: String,
    /// The viewer's role.
    pub role: Role,
}
