//! Record annotation and dashboard filtering.
//!
//! Records carry raw check-in/check-out times; their status is always
//! recomputed from the settings passed in, never stored.

use serde::{Deserialize, Serialize};

use crate::config::{AccessSettings, TimeSettings};
use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{
    AnnotatedRecord, AttendanceRecord, CheckInStatus, CheckOutStatus, Role, Shift, Viewer,
};

use super::evaluator::evaluate_shift;

/// Filters applied to a record listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    /// Keep only records for this shift.
    #[serde(default)]
    pub shift: Option<Shift>,
    /// Case-insensitive text matched against date, name and shift.
    #[serde(default)]
    pub search: Option<String>,
}

/// Dashboard counters over an annotated listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Number of records in the listing.
    pub total: usize,
    /// Records whose check-in was on time.
    pub on_time: usize,
    /// Records whose check-in was late.
    pub late: usize,
    /// Records whose check-out was overtime.
    pub overtime: usize,
}

/// Attaches the computed status to a record.
pub fn annotate(record: AttendanceRecord, settings: &TimeSettings) -> AttendanceResult<AnnotatedRecord> {
    let status = evaluate_shift(
        &record.check_in_time,
        &record.check_out_time,
        record.shift,
        settings,
    )?;
    Ok(AnnotatedRecord { record, status })
}

/// Produces the listing a viewer is allowed to see, with statuses attached.
///
/// Regular users are turned away with `AccessDenied` when the access policy
/// closes the dashboard to employees. Otherwise they only see their own
/// records unless the policy lets them view everyone's. The shift filter and
/// the search text are applied after visibility. Only an empty search string
/// matches everything; whitespace is searched for literally.
///
/// Records are annotated before filtering, so a malformed time on any
/// visible record fails the whole listing.
pub fn filter_records(
    records: Vec<AttendanceRecord>,
    viewer: &Viewer,
    query: &RecordQuery,
    access: &AccessSettings,
    settings: &TimeSettings,
) -> AttendanceResult<Vec<AnnotatedRecord>> {
    if viewer.role == Role::User && !access.allow_employee_dashboard_access {
        return Err(AttendanceError::AccessDenied {
            user_id: viewer.user_id.clone(),
            message: "employee dashboard access is disabled".to_string(),
        });
    }

    let own_only = viewer.role == Role::User && !access.allow_employee_view_all_records;
    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    records
        .into_iter()
        .filter(|record| !own_only || record.user_id == viewer.user_id)
        .map(|record| annotate(record, settings))
        .filter(|annotated| match annotated {
            Ok(annotated) => matches_query(&annotated.record, query.shift, needle.as_deref()),
            Err(_) => true,
        })
        .collect()
}

/// Counts on-time and late check-ins and overtime check-outs.
pub fn summarize(records: &[AnnotatedRecord]) -> AttendanceSummary {
    records
        .iter()
        .fold(AttendanceSummary::default(), |mut summary, annotated| {
            summary.total += 1;
            match annotated.status.check_in_status {
                CheckInStatus::OnTime => summary.on_time += 1,
                CheckInStatus::Late => summary.late += 1,
            }
            if annotated.status.check_out_status == CheckOutStatus::Overtime {
                summary.overtime += 1;
            }
            summary
        })
}

fn matches_query(record: &AttendanceRecord, shift: Option<Shift>, needle: Option<&str>) -> bool {
    if shift.is_some_and(|shift| shift != record.shift) {
        return false;
    }

    match needle {
        None => true,
        Some(needle) => {
            record.date.to_string().contains(needle)
                || record.name.to_lowercase().contains(needle)
                || record.shift.name().to_lowercase().contains(needle)
        }
    }
}
