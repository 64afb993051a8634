//! Request types for the shift attendance API.

use serde::{Deserialize, Serialize};

use crate::attendance::RecordQuery;
use crate::models::{AttendanceRecord, Viewer};

/// Request body for the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    /// Check-in time of day.
    pub check_in_time: String,
    /// Check-out time of day.
    pub check_out_time: String,
    /// Shift configuration key; unknown keys are reported as invalid shifts.
    pub shift: String,
}

/// Request body for the `/records/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQueryRequest {
    /// Who the listing is for.
    pub viewer: Viewer,
    /// Optional shift and search filters.
    #[serde(default)]
    pub query: RecordQuery,
    /// The records to annotate and filter.
    pub records: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_evaluate_request_uses_camel_case() {
        let request: EvaluateRequest = serde_json::from_str(
            r#"{"checkInTime": "06:05:00", "checkOutTime": "14:35:00", "shift": "Pagi"}"#,
        )
        .unwrap();
        assert_eq!(request.check_in_time, "06:05:00");
        assert_eq!(request.shift, "Pagi");
    }

    #[test]
    fn test_record_query_defaults_to_no_filters() {
        let request: RecordQueryRequest = serde_json::from_str(
            r#"{"viewer": {"userId": "1", "role": "admin"}, "records": []}"#,
        )
        .unwrap();
        assert_eq!(request.viewer.role, Role::Admin);
        assert_eq!(request.query, RecordQuery::default());
    }
}
