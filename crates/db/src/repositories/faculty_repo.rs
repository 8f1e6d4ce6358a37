//! Repository for the `faculty` table.

use campus_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::faculty::{CreateFacultyProfile, Faculty};

const COLUMNS: &str = "id, user_id, dept, designation, phone, qualification, \
                        experience, created_at, updated_at";

/// Provides CRUD operations for faculty profiles.
pub struct FacultyRepo;

impl FacultyRepo {
    /// Insert a faculty profile inside an open transaction (see
    /// [`crate::repositories::UserRepo::create_with_profile`]).
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        input: &CreateFacultyProfile,
    ) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculty (user_id, dept, designation, phone, qualification, experience)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(user_id)
            .bind(&input.dept)
            .bind(&input.designation)
            .bind(&input.phone)
            .bind(&input.qualification)
            .bind(input.experience)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a faculty profile by its own ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculty WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the faculty profile linked to a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculty WHERE user_id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of faculty members.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM faculty")
            .fetch_one(pool)
            .await
    }
}
