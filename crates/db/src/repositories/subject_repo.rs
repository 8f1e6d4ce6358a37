//! Repository for the `subjects` table.
//!
//! Subjects are hard-deleted. `find_owned` is the single ownership gate
//! for all faculty attendance/marks paths.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{CreateSubject, Subject, SubjectDetail, UpdateSubject};

const COLUMNS: &str =
    "id, name, code, class_id, faculty_id, credits, semester, created_at, updated_at";

/// Join used by listings that need class and faculty identity.
const DETAIL_SELECT: &str = "SELECT sub.id, sub.name, sub.code,
        sub.class_id, c.name AS class_name, c.year AS class_year, c.section AS class_section,
        sub.faculty_id, u.name AS faculty_name,
        sub.credits, sub.semester
     FROM subjects sub
     JOIN classes c ON c.id = sub.class_id
     JOIN faculty f ON f.id = sub.faculty_id
     JOIN users u ON u.id = f.user_id";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (name, code, class_id, faculty_id, credits, semester)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.class_id)
            .bind(input.faculty_id)
            .bind(input.credits)
            .bind(input.semester)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a subject by its unique code (duplicate pre-check).
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE code = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a subject scoped to the faculty member who teaches it.
    ///
    /// Returns `None` both when the subject does not exist and when it is
    /// taught by someone else -- callers must not distinguish the two.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        faculty_id: DbId,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1 AND faculty_id = $2");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(faculty_id)
            .fetch_optional(pool)
            .await
    }

    /// List subjects with class/faculty detail, optionally filtered by class.
    pub async fn list(
        pool: &PgPool,
        class_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SubjectDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::bigint IS NULL OR sub.class_id = $1)
             ORDER BY sub.name ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SubjectDetail>(&query)
            .bind(class_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count subjects matching the same filter as [`SubjectRepo::list`].
    pub async fn count_filtered(
        pool: &PgPool,
        class_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM subjects WHERE ($1::bigint IS NULL OR class_id = $1)",
        )
        .bind(class_id)
        .fetch_one(pool)
        .await
    }

    /// All subjects taught by one faculty member, with class detail.
    pub async fn list_by_faculty(
        pool: &PgPool,
        faculty_id: DbId,
    ) -> Result<Vec<SubjectDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE sub.faculty_id = $1
             ORDER BY sub.name ASC"
        );
        sqlx::query_as::<_, SubjectDetail>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    /// All subjects of a class (a student's enrolled subjects).
    pub async fn list_by_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE class_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Subject>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Number of subjects taught by one faculty member.
    pub async fn count_by_faculty(pool: &PgPool, faculty_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subjects WHERE faculty_id = $1")
            .bind(faculty_id)
            .fetch_one(pool)
            .await
    }

    /// Total number of subjects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(pool)
            .await
    }

    /// Update a subject. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubject,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                class_id = COALESCE($4, class_id),
                faculty_id = COALESCE($5, faculty_id),
                credits = COALESCE($6, credits),
                semester = COALESCE($7, semester),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.class_id)
            .bind(input.faculty_id)
            .bind(input.credits)
            .bind(input.semester)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a subject. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
