//! Wall-clock time parsing and day anchoring.
//!
//! Attendance times arrive as `HH:MM` or `HH:MM:SS` strings. Comparisons are
//! made between [`NaiveDateTime`] values anchored to a shared reference day,
//! so only the time of day matters unless a value is explicitly moved to the
//! following day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{AttendanceError, AttendanceResult};

/// Which calendar day a time is anchored to, relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAnchor {
    /// The reference day itself.
    SameDay,
    /// The day after the reference day.
    NextDay,
}

/// The arbitrary day every time of day is anchored to.
pub fn reference_date() -> NaiveDate {
    NaiveDate::default()
}

/// Parses a strict `HH:MM` or `HH:MM:SS` time of day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use shift_attendance::models::parse_time_of_day;
///
/// assert_eq!(
///     parse_time_of_day("06:05:00").unwrap(),
///     NaiveTime::from_hms_opt(6, 5, 0).unwrap()
/// );
/// assert!(parse_time_of_day("6:05").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> AttendanceResult<NaiveTime> {
    let format = match value.len() {
        5 => "%H:%M",
        8 => "%H:%M:%S",
        _ => return Err(malformed(value, "expected HH:MM or HH:MM:SS")),
    };

    let well_shaped = value.bytes().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            b == b':'
        } else {
            b.is_ascii_digit()
        }
    });
    if !well_shaped {
        return Err(malformed(value, "expected HH:MM or HH:MM:SS"));
    }

    let time =
        NaiveTime::parse_from_str(value, format).map_err(|e| malformed(value, &e.to_string()))?;

    // chrono represents second 60 as a leap second; wall-clock input never has one.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(malformed(value, "second out of range"));
    }
    Ok(time)
}

/// Places a time of day on the reference day or the day after it.
pub fn anchor(time: NaiveTime, day: DayAnchor) -> NaiveDateTime {
    let anchored = reference_date().and_time(time);
    match day {
        DayAnchor::SameDay => anchored,
        DayAnchor::NextDay => anchored + Duration::days(1),
    }
}

/// Parses a time string and anchors it in one step.
pub fn parse_anchored(value: &str, day: DayAnchor) -> AttendanceResult<NaiveDateTime> {
    parse_time_of_day(value).map(|time| anchor(time, day))
}

fn malformed(value: &str, message: &str) -> AttendanceError {
    AttendanceError::MalformedTime {
        value: value.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parse_hours_and_minutes() {
        assert_eq!(parse_time_of_day("22:15").unwrap(), time(22, 15, 0));
    }

    #[test]
    fn test_parse_with_seconds() {
        assert_eq!(parse_time_of_day("08:05:23").unwrap(), time(8, 5, 23));
    }

    #[test]
    fn test_midnight_parses() {
        assert_eq!(parse_time_of_day("00:00").unwrap(), NaiveTime::MIN);
    }

    #[test]
    fn test_rejects_malformed_values() {
        for value in [
            "", "8:00", "08:0", "0800", "08-00", "08:00:0", "24:00", "12:60", "ab:cd", " 08:00",
            "08:00:00.5", "12:00:60", "23:59:60",
        ] {
            match parse_time_of_day(value) {
                Err(AttendanceError::MalformedTime { value: v, .. }) => assert_eq!(v, value),
                other => panic!("Expected MalformedTime for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_leap_second_is_rejected_with_reason() {
        match parse_time_of_day("22:15:60") {
            Err(AttendanceError::MalformedTime { message, .. }) => {
                assert_eq!(message, "second out of range");
            }
            other => panic!("Expected MalformedTime, got {:?}", other),
        }
    }

    #[test]
    fn test_last_second_of_day_parses() {
        assert_eq!(parse_time_of_day("23:59:59").unwrap(), time(23, 59, 59));
    }

    #[test]
    fn test_next_day_anchor_is_later_than_any_same_day_time() {
        let late_evening = anchor(time(23, 59, 59), DayAnchor::SameDay);
        let early_morning = anchor(time(0, 30, 0), DayAnchor::NextDay);
        assert!(early_morning > late_evening);
    }

    #[test]
    fn test_same_anchor_orders_by_time_only() {
        let a = parse_anchored("06:30", DayAnchor::NextDay).unwrap();
        let b = parse_anchored("06:40:00", DayAnchor::NextDay).unwrap();
        assert!(b > a);
        assert_eq!(a.date(), reference_date().succ_opt().unwrap());
    }
}
