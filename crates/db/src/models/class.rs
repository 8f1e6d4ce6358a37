//! Class entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full class row from the `classes` table.
///
/// A class is unique on (name, year, section).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Class {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub section: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a class.
#[derive(Debug, Deserialize)]
pub struct CreateClass {
    pub name: String,
    pub year: i32,
    pub section: String,
}

/// DTO for updating a class. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateClass {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub section: Option<String>,
}
