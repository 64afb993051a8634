//! Settings types for attendance evaluation.
//!
//! These structures mirror the persisted layout: a table keyed by shift name
//! whose entries hold five `HH:MM` strings, plus a set of access policy flags.

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{DayAnchor, Shift, parse_anchored};

/// Time windows for a single shift.
///
/// Values are kept as entered so that administrator edits round-trip
/// unchanged; they are parsed when evaluated or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTimeSettings {
    /// Start of the on-time check-in window.
    pub check_in_start: String,
    /// End of the on-time check-in window; later check-ins are late.
    pub check_in_end: String,
    /// Start of the normal check-out window.
    pub check_out_start: String,
    /// End of the normal check-out window.
    pub check_out_end: String,
    /// Check-outs after this time are overtime.
    pub overtime_threshold: String,
}

impl ShiftTimeSettings {
    /// Creates settings from the five window values.
    pub fn new(
        check_in_start: &str,
        check_in_end: &str,
        check_out_start: &str,
        check_out_end: &str,
        overtime_threshold: &str,
    ) -> Self {
        Self {
            check_in_start: check_in_start.to_string(),
            check_in_end: check_in_end.to_string(),
            check_out_start: check_out_start.to_string(),
            check_out_end: check_out_end.to_string(),
            overtime_threshold: overtime_threshold.to_string(),
        }
    }

    /// Checks that every value parses and each window starts before it ends.
    ///
    /// For the night shift the check-out window is placed on the following
    /// day before comparing.
    pub fn validate(&self, shift: Shift) -> AttendanceResult<()> {
        let check_out_day = if shift.is_night() {
            DayAnchor::NextDay
        } else {
            DayAnchor::SameDay
        };

        let check_in_start = parse_anchored(&self.check_in_start, DayAnchor::SameDay)?;
        let check_in_end = parse_anchored(&self.check_in_end, DayAnchor::SameDay)?;
        let check_out_start = parse_anchored(&self.check_out_start, check_out_day)?;
        let check_out_end = parse_anchored(&self.check_out_end, check_out_day)?;
        parse_anchored(&self.overtime_threshold, check_out_day)?;

        if check_in_start >= check_in_end {
            return Err(AttendanceError::InvalidSettings {
                shift: shift.to_string(),
                message: "checkInStart must be before checkInEnd".to_string(),
            });
        }
        if check_out_start >= check_out_end {
            return Err(AttendanceError::InvalidSettings {
                shift: shift.to_string(),
                message: "checkOutStart must be before checkOutEnd".to_string(),
            });
        }
        Ok(())
    }
}

/// Time windows for every shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    /// Regular office hours.
    #[serde(rename = "Reguler")]
    pub reguler: ShiftTimeSettings,
    /// Morning shift.
    #[serde(rename = "Pagi")]
    pub pagi: ShiftTimeSettings,
    /// Afternoon shift.
    #[serde(rename = "Siang")]
    pub siang: ShiftTimeSettings,
    /// Night shift.
    #[serde(rename = "Malam")]
    pub malam: ShiftTimeSettings,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            reguler: ShiftTimeSettings::new("08:00", "08:15", "17:00", "17:30", "17:30"),
            pagi: ShiftTimeSettings::new("06:00", "06:15", "14:00", "14:30", "14:30"),
            siang: ShiftTimeSettings::new("14:00", "14:15", "22:00", "22:30", "22:30"),
            malam: ShiftTimeSettings::new("22:00", "22:15", "06:00", "06:30", "06:30"),
        }
    }
}

impl TimeSettings {
    /// Returns the windows for a shift.
    pub fn for_shift(&self, shift: Shift) -> &ShiftTimeSettings {
        match shift {
            Shift::Reguler => &self.reguler,
            Shift::Pagi => &self.pagi,
            Shift::Siang => &self.siang,
            Shift::Malam => &self.malam,
        }
    }

    /// Returns a mutable reference to the windows for a shift.
    pub fn for_shift_mut(&mut self, shift: Shift) -> &mut ShiftTimeSettings {
        match shift {
            Shift::Reguler => &mut self.reguler,
            Shift::Pagi => &mut self.pagi,
            Shift::Siang => &mut self.siang,
            Shift::Malam => &mut self.malam,
        }
    }

    /// Looks up a shift's windows by its configuration key.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_attendance::config::TimeSettings;
    /// use shift_attendance::error::AttendanceError;
    ///
    /// let settings = TimeSettings::default();
    /// assert_eq!(settings.lookup("Pagi").unwrap().check_in_end, "06:15");
    /// assert!(matches!(
    ///     settings.lookup("Unknown"),
    ///     Err(AttendanceError::InvalidShift { .. })
    /// ));
    /// ```
    pub fn lookup(&self, shift: &str) -> AttendanceResult<&ShiftTimeSettings> {
        let shift: Shift = shift.parse()?;
        Ok(self.for_shift(shift))
    }

    /// Iterates over every shift and its windows.
    pub fn iter(&self) -> impl Iterator<Item = (Shift, &ShiftTimeSettings)> {
        Shift::ALL
            .into_iter()
            .map(move |shift| (shift, self.for_shift(shift)))
    }

    /// Validates every shift, stopping at the first problem.
    pub fn validate(&self) -> AttendanceResult<()> {
        self.iter()
            .try_for_each(|(shift, settings)| settings.validate(shift))
    }
}

/// Administrator access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessSettings {
    /// Employees may open the dashboard.
    pub allow_employee_dashboard_access: bool,
    /// Employees may see records of other employees.
    pub allow_employee_view_all_records: bool,
    /// Check-in requires an attendance sheet photo and a selfie.
    pub require_photo_for_check_in: bool,
    /// Employees may edit their logbook after submitting.
    pub allow_logbook_edit: bool,
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            allow_employee_dashboard_access: true,
            allow_employee_view_all_records: false,
            require_photo_for_check_in: true,
            allow_logbook_edit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TimeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_night_shift_values() {
        let settings = TimeSettings::default();
        let malam = settings.for_shift(Shift::Malam);
        assert_eq!(malam.check_in_end, "22:15");
        assert_eq!(malam.overtime_threshold, "06:30");
    }

    #[test]
    fn test_check_in_window_must_be_ordered() {
        let mut settings = TimeSettings::default();
        settings.for_shift_mut(Shift::Pagi).check_in_end = "05:45".to_string();

        match settings.validate() {
            Err(AttendanceError::InvalidSettings { shift, message }) => {
                assert_eq!(shift, "Pagi");
                assert!(message.contains("checkInStart"));
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_window_bounds_are_rejected() {
        let mut settings = TimeSettings::default();
        let reguler = settings.for_shift_mut(Shift::Reguler);
        reguler.check_out_start = "17:30".to_string();

        assert!(matches!(
            settings.validate(),
            Err(AttendanceError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_night_shift_check_out_window_is_compared_on_next_day() {
        let malam = ShiftTimeSettings::new("22:00", "22:15", "06:00", "06:30", "06:30");
        assert!(malam.validate(Shift::Malam).is_ok());

        let reversed = ShiftTimeSettings::new("22:00", "22:15", "06:30", "06:00", "06:30");
        assert!(reversed.validate(Shift::Malam).is_err());
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let mut settings = TimeSettings::default();
        settings.for_shift_mut(Shift::Siang).overtime_threshold = "22.30".to_string();

        match settings.validate() {
            Err(AttendanceError::MalformedTime { value, .. }) => assert_eq!(value, "22.30"),
            other => panic!("Expected MalformedTime, got {:?}", other),
        }
    }

    #[test]
    fn test_time_settings_json_layout() {
        let json = serde_json::to_value(TimeSettings::default()).unwrap();
        assert_eq!(json["Pagi"]["checkInEnd"], "06:15");
        assert_eq!(json["Malam"]["overtimeThreshold"], "06:30");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_time_settings_require_all_shifts() {
        let mut json = serde_json::to_value(TimeSettings::default()).unwrap();
        json.as_object_mut().unwrap().remove("Siang");
        let result: Result<TimeSettings, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_access_settings_fill_missing_flags_with_defaults() {
        let settings: AccessSettings =
            serde_json::from_str(r#"{"requirePhotoForCheckIn": false}"#).unwrap();
        assert!(!settings.require_photo_for_check_in);
        assert!(settings.allow_employee_dashboard_access);
        assert!(!settings.allow_employee_view_all_records);
    }
}
