//! Inclusive same-day time range checks.

use crate::error::AttendanceResult;
use crate::models::{DayAnchor, parse_anchored};

/// Returns true when `time` lies within `[start, end]` on the same day.
///
/// A range whose end is before its start contains nothing; ranges that wrap
/// past midnight are not interpreted.
///
/// ```
/// use shift_attendance::attendance::is_within_range;
///
/// assert!(is_within_range("08:15:00", "08:00", "08:15").unwrap());
/// assert!(!is_within_range("08:15:01", "08:00", "08:15").unwrap());
/// ```
pub fn is_within_range(time: &str, start: &str, end: &str) -> AttendanceResult<bool> {
    let time = parse_anchored(time, DayAnchor::SameDay)?;
    let start = parse_anchored(start, DayAnchor::SameDay)?;
    let end = parse_anchored(end, DayAnchor::SameDay)?;

    Ok(start <= time && time <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttendanceError;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_within_range("08:00", "08:00", "08:15").unwrap());
        assert!(is_within_range("08:15", "08:00", "08:15").unwrap());
    }

    #[test]
    fn test_outside_range() {
        assert!(!is_within_range("07:59", "08:00", "08:15").unwrap());
        assert!(!is_within_range("08:16", "08:00", "08:15").unwrap());
    }

    #[test]
    fn test_wrapping_range_is_empty() {
        assert!(!is_within_range("23:00", "22:00", "06:00").unwrap());
        assert!(!is_within_range("01:00", "22:00", "06:00").unwrap());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            is_within_range("08:00", "eight", "08:15"),
            Err(AttendanceError::MalformedTime { .. })
        ));
    }
}
