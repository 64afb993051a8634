//! Check-in and check-out form submissions.

use serde::{Deserialize, Serialize};

use super::shift::Shift;

/// Data captured when an employee checks in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSubmission {
    /// The shift the employee is starting, if one was chosen.
    #[serde(default)]
    pub shift: Option<Shift>,
    /// Photo of the paper attendance sheet.
    #[serde(default)]
    pub attendance_sheet_photo: Option<String>,
    /// Selfie taken at check-in.
    #[serde(default)]
    pub selfie_photo: Option<String>,
}

/// Data captured when an employee checks out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutSubmission {
    /// Free-text activity entries for the day.
    #[serde(default)]
    pub logbook: Vec<String>,
}
