//! Subject entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full subject row from the `subjects` table.
///
/// A subject belongs to one class and is taught by one faculty member;
/// `faculty_id` is the ownership anchor for all attendance/marks writes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub class_id: DbId,
    pub faculty_id: DbId,
    pub credits: i32,
    pub semester: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Subject joined with its class and the teaching faculty's user name,
/// for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubjectDetail {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub class_id: DbId,
    pub class_name: String,
    pub class_year: i32,
    pub class_section: String,
    pub faculty_id: DbId,
    pub faculty_name: String,
    pub credits: i32,
    pub semester: i32,
}

/// DTO for creating a subject.
#[derive(Debug, Deserialize)]
pub struct CreateSubject {
    pub name: String,
    pub code: String,
    pub class_id: DbId,
    pub faculty_id: DbId,
    pub credits: i32,
    pub semester: i32,
}

/// DTO for updating a subject. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSubject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub class_id: Option<DbId>,
    pub faculty_id: Option<DbId>,
    pub credits: Option<i32>,
    pub semester: Option<i32>,
}
