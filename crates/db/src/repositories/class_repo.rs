//! Repository for the `classes` table.
//!
//! Classes are hard-deleted (no is_active flag), unlike users and notices.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::class::{Class, CreateClass, UpdateClass};

const COLUMNS: &str = "id, name, year, section, created_at, updated_at";

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (name, year, section)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.section)
            .fetch_one(pool)
            .await
    }

    /// Find a class by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class by its unique (name, year, section) triple.
    ///
    /// Used as the duplicate pre-check before creation.
    pub async fn find_by_fields(
        pool: &PgPool,
        name: &str,
        year: i32,
        section: &str,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM classes WHERE name = $1 AND year = $2 AND section = $3");
        sqlx::query_as::<_, Class>(&query)
            .bind(name)
            .bind(year)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// List classes ordered by year then name.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM classes
             ORDER BY year ASC, name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of classes.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(pool)
            .await
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                section = COALESCE($4, section),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.section)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a class. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
