//! Repository for the `notices` table.
//!
//! Notices are soft-deleted via `is_active = false` to preserve posting
//! history. Audience scoping: students see `all`/`students` notices plus
//! `class` notices for their own class; faculty see `all`/`faculty`.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::notice::{
    CreateNotice, Notice, NoticeAudience, NoticeWithAuthor, UpdateNotice,
};

const COLUMNS: &str = "id, title, content, posted_by, target, target_class_id, \
                        priority, is_active, expires_at, created_at, updated_at";

const AUTHOR_SELECT: &str = "SELECT n.id, n.title, n.content, n.target, n.target_class_id,
        n.priority, n.expires_at, n.created_at,
        u.name AS author_name, u.role AS author_role
     FROM notices n
     JOIN users u ON u.id = n.posted_by";

/// Visibility predicate for one audience. Both predicates reference `$1`
/// (the reader's class id, NULL for faculty) so the bind list is uniform.
const AUDIENCE_FACULTY: &str = "($1::bigint IS NULL AND n.target IN ('all', 'faculty'))";
const AUDIENCE_STUDENT: &str =
    "(n.target IN ('all', 'students') OR (n.target = 'class' AND n.target_class_id = $1))";

/// Provides CRUD operations for notices.
pub struct NoticeRepo;

impl NoticeRepo {
    /// Insert a new notice, returning the created row.
    pub async fn create(
        pool: &PgPool,
        posted_by: DbId,
        input: &CreateNotice,
    ) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices
                (title, content, posted_by, target, target_class_id, priority, expires_at)
             VALUES ($1, $2, $3, COALESCE($4, 'all'), $5, COALESCE($6, 'medium'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(posted_by)
            .bind(&input.target)
            .bind(input.target_class_id)
            .bind(&input.priority)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a notice by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing: active notices, newest first, optional target filter.
    pub async fn list(
        pool: &PgPool,
        target: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NoticeWithAuthor>, sqlx::Error> {
        let query = format!(
            "{AUTHOR_SELECT}
             WHERE n.is_active = true
               AND ($1::text IS NULL OR n.target = $1)
             ORDER BY n.created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, NoticeWithAuthor>(&query)
            .bind(target)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count active notices matching the same filter as [`NoticeRepo::list`].
    pub async fn count_filtered(
        pool: &PgPool,
        target: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notices
             WHERE is_active = true AND ($1::text IS NULL OR target = $1)",
        )
        .bind(target)
        .fetch_one(pool)
        .await
    }

    /// Active notices visible to an audience, newest first, paginated.
    pub async fn list_for_audience(
        pool: &PgPool,
        audience: NoticeAudience,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NoticeWithAuthor>, sqlx::Error> {
        let (predicate, class_id) = Self::audience_predicate(audience);
        let query = format!(
            "{AUTHOR_SELECT}
             WHERE n.is_active = true AND {predicate}
             ORDER BY n.created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, NoticeWithAuthor>(&query)
            .bind(class_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count active notices visible to an audience.
    pub async fn count_for_audience(
        pool: &PgPool,
        audience: NoticeAudience,
    ) -> Result<i64, sqlx::Error> {
        let (predicate, class_id) = Self::audience_predicate(audience);
        let query =
            format!("SELECT COUNT(*) FROM notices n WHERE n.is_active = true AND {predicate}");
        sqlx::query_scalar(&query)
            .bind(class_id)
            .fetch_one(pool)
            .await
    }

    /// Total number of active notices (admin dashboard).
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notices WHERE is_active = true")
            .fetch_one(pool)
            .await
    }

    /// Update a notice. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                target = COALESCE($4, target),
                target_class_id = COALESCE($5, target_class_id),
                priority = COALESCE($6, priority),
                expires_at = COALESCE($7, expires_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.target)
            .bind(input.target_class_id)
            .bind(&input.priority)
            .bind(input.expires_at)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a notice by setting `is_active = false`.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notices SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    fn audience_predicate(audience: NoticeAudience) -> (&'static str, Option<DbId>) {
        match audience {
            NoticeAudience::Faculty => (AUDIENCE_FACULTY, None),
            NoticeAudience::Student { class_id } => (AUDIENCE_STUDENT, Some(class_id)),
        }
    }
}
