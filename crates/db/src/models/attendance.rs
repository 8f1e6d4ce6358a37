//! Attendance entity model and DTOs.

use campus_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One roster line submitted when a faculty member marks attendance.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: DbId,
    pub status: String,
    pub remarks: Option<String>,
}

/// Attendance row joined with student and subject identity, for listings
/// and the admin report.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendanceDetail {
    pub id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub remarks: Option<String>,
    pub student_id: DbId,
    pub student_name: String,
    pub reg_no: String,
    pub subject_id: DbId,
    pub subject_name: String,
    pub subject_code: String,
}
