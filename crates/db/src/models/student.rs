//! Student profile model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full student row from the `students` table (1:1 with a `users` row).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub user_id: DbId,
    pub reg_no: String,
    pub class_id: DbId,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Allow-listed student profile fields accepted at registration.
///
/// `deny_unknown_fields` rejects any extra payload keys instead of
/// silently dropping them into the insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentProfile {
    pub reg_no: String,
    pub class_id: DbId,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// One roster line for a faculty member's class list: student identity
/// joined with the linked user's name and email.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RosterEntry {
    pub id: DbId,
    pub reg_no: String,
    pub name: String,
    pub email: String,
}
