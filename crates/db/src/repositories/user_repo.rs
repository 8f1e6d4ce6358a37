//! Repository for the `users` table.

use campus_core::roles::{ROLE_FACULTY, ROLE_STUDENT};
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateProfile, CreateUser, CreatedUser, UpdateUser, User};
use crate::repositories::{FacultyRepo, StudentRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, password_hash, role, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user together with its role profile in one transaction.
    ///
    /// If the profile insert fails (bad class id, duplicate reg_no), the
    /// user row is rolled back with it.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        profile: &CreateProfile,
    ) -> Result<CreatedUser, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(&mut *tx)
            .await?;

        let mut created = CreatedUser {
            user,
            student: None,
            faculty: None,
        };

        match profile {
            CreateProfile::Student(p) if input.role == ROLE_STUDENT => {
                created.student =
                    Some(StudentRepo::create(&mut tx, created.user.id, p).await?);
            }
            CreateProfile::Faculty(p) if input.role == ROLE_FACULTY => {
                created.faculty =
                    Some(FacultyRepo::create(&mut tx, created.user.id, p).await?);
            }
            _ => {}
        }

        tx.commit().await?;
        tracing::debug!(user_id = created.user.id, role = %created.user.role, "Created user");
        Ok(created)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive, emails are stored lowercased).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users, newest first, with optional additive filters:
    /// exact role match AND case-insensitive substring search on name/email.
    pub async fn list(
        pool: &PgPool,
        role: Option<&str>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE ($1::text IS NULL OR role = $1)
               AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(role)
            .bind(search.map(|s| format!("%{s}%")))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count users matching the same filters as [`UserRepo::list`].
    pub async fn count(
        pool: &PgPool,
        role: Option<&str>,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users
             WHERE ($1::text IS NULL OR role = $1)
               AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)",
        )
        .bind(role)
        .bind(search.map(|s| format!("%{s}%")))
        .fetch_one(pool)
        .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a user by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated. The row is kept to preserve
    /// referential history (attendance marked_by, notices posted_by).
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
