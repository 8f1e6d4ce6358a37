//! Notice entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full notice row from the `notices` table.
///
/// Notices are soft-deleted via `is_active = false`, never removed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub posted_by: DbId,
    /// One of `all`, `students`, `faculty`, `class`.
    pub target: String,
    /// Set when `target == "class"`.
    pub target_class_id: Option<DbId>,
    /// One of `low`, `medium`, `high`, `urgent`.
    pub priority: String,
    pub is_active: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Notice joined with its author's name and role, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoticeWithAuthor {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub target: String,
    pub target_class_id: Option<DbId>,
    pub priority: String,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub author_name: String,
    pub author_role: String,
}

/// The audience a reader belongs to, used to scope notice visibility.
#[derive(Debug, Clone, Copy)]
pub enum NoticeAudience {
    /// Sees `all` and `faculty` notices.
    Faculty,
    /// Sees `all`, `students`, and `class` notices for their own class.
    Student { class_id: DbId },
}

/// DTO for creating a notice. `posted_by` comes from the caller's identity.
#[derive(Debug, Deserialize)]
pub struct CreateNotice {
    pub title: String,
    pub content: String,
    pub target: Option<String>,
    pub target_class_id: Option<DbId>,
    pub priority: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// DTO for updating a notice. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateNotice {
    pub title: Option<String>,
    pub content: Option<String>,
    pub target: Option<String>,
    pub target_class_id: Option<DbId>,
    pub priority: Option<String>,
    pub expires_at: Option<Timestamp>,
}
