//! Mark entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full mark row from the `marks` table.
///
/// Marks are append-only: resubmitting an assessment inserts new rows
/// rather than replacing earlier ones.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mark {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub mark: f64,
    pub max_mark: f64,
    /// One of `internal`, `external`, `assignment`, `quiz`, `project`.
    pub assessment_type: String,
    pub assessment_date: NaiveDate,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One line submitted when a faculty member records marks.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkEntry {
    pub student_id: DbId,
    pub mark: f64,
    /// Defaults to 100.
    pub max_mark: Option<f64>,
    pub assessment_type: String,
    /// Defaults to today.
    pub assessment_date: Option<NaiveDate>,
    pub remarks: Option<String>,
}

/// Mark row joined with student and subject identity, for listings and
/// the admin report.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MarkDetail {
    pub id: DbId,
    pub mark: f64,
    pub max_mark: f64,
    pub assessment_type: String,
    pub assessment_date: NaiveDate,
    pub remarks: Option<String>,
    pub student_id: DbId,
    pub student_name: String,
    pub reg_no: String,
    pub subject_id: DbId,
    pub subject_name: String,
    pub subject_code: String,
}
