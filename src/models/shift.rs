//! Shift identifiers.
//!
//! The engine knows four fixed shifts. `Malam` is the night shift whose
//! check-out falls on the calendar day after check-in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttendanceError;

/// One of the four fixed work schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// Regular office hours.
    Reguler,
    /// Morning shift.
    Pagi,
    /// Afternoon shift.
    Siang,
    /// Night shift, crosses midnight.
    Malam,
}

impl Shift {
    /// All shifts in their configuration order.
    pub const ALL: [Shift; 4] = [Shift::Reguler, Shift::Pagi, Shift::Siang, Shift::Malam];

    /// Returns the shift's configuration key.
    pub fn name(self) -> &'static str {
        match self {
            Shift::Reguler => "Reguler",
            Shift::Pagi => "Pagi",
            Shift::Siang => "Siang",
            Shift::Malam => "Malam",
        }
    }

    /// Returns true for the shift whose check-out happens on the next day.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_attendance::models::Shift;
    ///
    /// assert!(Shift::Malam.is_night());
    /// assert!(!Shift::Pagi.is_night());
    /// ```
    pub fn is_night(self) -> bool {
        matches!(self, Shift::Malam)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shift {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::ALL
            .into_iter()
            .find(|shift| shift.name() == s)
            .ok_or_else(|| AttendanceError::InvalidShift {
                shift: s.to_string(),
            })
    }
}
