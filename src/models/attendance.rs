//! Attendance model and status enum.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance outcome for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Employee attended.
    Present,
    /// Employee did not attend.
    Absent,
    /// Employee attended but checked in late.
    Late,
}

impl AttendanceStatus {
    /// Returns the stored label ("PRESENT", "ABSENT", "LATE").
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Late => "LATE",
        }
    }
}

/// A single day of attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Storage identifier.
    pub id: u64,
    /// Id of the owning employee.
    pub employee: u64,
    /// The day this record covers.
    pub date: NaiveDate,
    /// Check-in time.
    pub check_in: NaiveTime,
    /// Check-out time, absent if the employee never checked out.
    pub check_out: Option<NaiveTime>,
    /// Hours worked that day.
    pub total_hours: Decimal,
    /// Attendance outcome.
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"PRESENT\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Late).unwrap(),
            "\"LATE\""
        );
        let status: AttendanceStatus = serde_json::from_str("\"ABSENT\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_status_as_str_matches_serde_label() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.as_str());
        }
    }

    #[test]
    fn test_deserialize_record_without_check_out() {
        let json = r#"{
            "id": 3,
            "employee": 1,
            "date": "2026-09-14",
            "check_in": "00:00:00",
            "check_out": null,
            "total_hours": "0.00",
            "status": "ABSENT"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.check_out, None);
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.total_hours, Decimal::ZERO);
    }
}
