//! Timetable entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full timetable row from the `timetable` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TimetableEntry {
    pub id: DbId,
    pub class_id: DbId,
    pub subject_id: DbId,
    /// One of `mon` .. `sat`.
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_no: Option<String>,
    pub semester: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Timetable entry joined with class, subject, and teaching faculty name,
/// for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TimetableSlot {
    pub id: DbId,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_no: Option<String>,
    pub semester: i32,
    pub class_id: DbId,
    pub class_name: String,
    pub class_section: String,
    pub subject_id: DbId,
    pub subject_name: String,
    pub subject_code: String,
    pub faculty_name: String,
}

/// DTO for creating a timetable entry.
#[derive(Debug, Deserialize)]
pub struct CreateTimetableEntry {
    pub class_id: DbId,
    pub subject_id: DbId,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_no: Option<String>,
    pub semester: i32,
}

/// DTO for updating a timetable entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTimetableEntry {
    pub class_id: Option<DbId>,
    pub subject_id: Option<DbId>,
    pub day: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room_no: Option<String>,
    pub semester: Option<i32>,
}
