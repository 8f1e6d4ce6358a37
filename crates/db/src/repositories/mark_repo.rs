//! Repository for the `marks` table.
//!
//! Marks are append-only: there is no replace path, and resubmitting the
//! same batch inserts new rows. Matches the recorded grading behavior.

use campus_core::types::DbId;
use sqlx::{PgPool, QueryBuilder};

use crate::models::mark::{MarkDetail, MarkEntry};

const DETAIL_SELECT: &str = "SELECT m.id, m.mark, m.max_mark, m.assessment_type, m.assessment_date, m.remarks,
        m.student_id, u.name AS student_name, s.reg_no,
        m.subject_id, sub.name AS subject_name, sub.code AS subject_code
     FROM marks m
     JOIN students s ON s.id = m.student_id
     JOIN users u ON u.id = s.user_id
     JOIN subjects sub ON sub.id = m.subject_id";

/// Provides write and query operations for marks.
pub struct MarkRepo;

impl MarkRepo {
    /// Bulk-insert a batch of marks for a subject.
    ///
    /// `max_mark` defaults to 100 and `assessment_date` to today when not
    /// provided. Returns the number of rows inserted.
    pub async fn add_batch(
        pool: &PgPool,
        subject_id: DbId,
        entries: &[MarkEntry],
    ) -> Result<u64, sqlx::Error> {
        if entries.is_empty() {
            return Ok(0);
        }

        let today = chrono::Utc::now().date_naive();
        let mut builder = QueryBuilder::new(
            "INSERT INTO marks (student_id, subject_id, mark, max_mark, assessment_type, assessment_date, remarks) ",
        );
        builder.push_values(entries, |mut b, entry| {
            b.push_bind(entry.student_id)
                .push_bind(subject_id)
                .push_bind(entry.mark)
                .push_bind(entry.max_mark.unwrap_or(100.0))
                .push_bind(&entry.assessment_type)
                .push_bind(entry.assessment_date.unwrap_or(today))
                .push_bind(&entry.remarks);
        });
        let result = builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Mark rows for subjects taught by one faculty member, with optional
    /// additive subject/student/assessment-type filters.
    pub async fn list_for_faculty(
        pool: &PgPool,
        faculty_id: DbId,
        subject_id: Option<DbId>,
        student_id: Option<DbId>,
        assessment_type: Option<&str>,
    ) -> Result<Vec<MarkDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE sub.faculty_id = $1
               AND ($2::bigint IS NULL OR m.subject_id = $2)
               AND ($3::bigint IS NULL OR m.student_id = $3)
               AND ($4::text IS NULL OR m.assessment_type = $4)
             ORDER BY m.assessment_date DESC, m.student_id ASC"
        );
        sqlx::query_as::<_, MarkDetail>(&query)
            .bind(faculty_id)
            .bind(subject_id)
            .bind(student_id)
            .bind(assessment_type)
            .fetch_all(pool)
            .await
    }

    /// A student's own marks with optional filters.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
        subject_id: Option<DbId>,
        assessment_type: Option<&str>,
    ) -> Result<Vec<MarkDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE m.student_id = $1
               AND ($2::bigint IS NULL OR m.subject_id = $2)
               AND ($3::text IS NULL OR m.assessment_type = $3)
             ORDER BY m.assessment_date DESC"
        );
        sqlx::query_as::<_, MarkDetail>(&query)
            .bind(student_id)
            .bind(subject_id)
            .bind(assessment_type)
            .fetch_all(pool)
            .await
    }

    /// A student's most recent marks (student dashboard).
    pub async fn recent_for_student(
        pool: &PgPool,
        student_id: DbId,
        limit: i64,
    ) -> Result<Vec<MarkDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE m.student_id = $1
             ORDER BY m.assessment_date DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, MarkDetail>(&query)
            .bind(student_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Admin report: all marks with optional class/subject/assessment-type
    /// filters, no ownership restriction.
    pub async fn report(
        pool: &PgPool,
        class_id: Option<DbId>,
        subject_id: Option<DbId>,
        assessment_type: Option<&str>,
    ) -> Result<Vec<MarkDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::bigint IS NULL OR s.class_id = $1)
               AND ($2::bigint IS NULL OR m.subject_id = $2)
               AND ($3::text IS NULL OR m.assessment_type = $3)
             ORDER BY m.assessment_date DESC"
        );
        sqlx::query_as::<_, MarkDetail>(&query)
            .bind(class_id)
            .bind(subject_id)
            .bind(assessment_type)
            .fetch_all(pool)
            .await
    }
}
