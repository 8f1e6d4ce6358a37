//! Faculty profile model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full faculty row from the `faculty` table (1:1 with a `users` row).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Faculty {
    pub id: DbId,
    pub user_id: DbId,
    pub dept: String,
    pub designation: String,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Allow-listed faculty profile fields accepted at registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateFacultyProfile {
    pub dept: String,
    pub designation: String,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
}
