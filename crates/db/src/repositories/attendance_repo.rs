//! Repository for the `attendance` table.
//!
//! Marking is replace-per-(subject, date): the prior submission is deleted
//! and the new roster inserted in one transaction, so resubmission is
//! idempotent and concurrent readers never observe the empty window.

use campus_core::attendance::AttendanceTally;
use campus_core::types::DbId;
use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};

use crate::models::attendance::{AttendanceDetail, AttendanceEntry};

const DETAIL_SELECT: &str = "SELECT a.id, a.date, a.status, a.remarks,
        a.student_id, u.name AS student_name, s.reg_no,
        a.subject_id, sub.name AS subject_name, sub.code AS subject_code
     FROM attendance a
     JOIN students s ON s.id = a.student_id
     JOIN users u ON u.id = s.user_id
     JOIN subjects sub ON sub.id = a.subject_id";

/// Provides write and aggregate operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Replace the attendance roster for (subject, date).
    ///
    /// Deletes all existing rows for the pair and bulk-inserts `entries`
    /// atomically. Returns the number of rows inserted.
    pub async fn replace_for_subject_date(
        pool: &PgPool,
        subject_id: DbId,
        date: NaiveDate,
        marked_by: DbId,
        entries: &[AttendanceEntry],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM attendance WHERE subject_id = $1 AND date = $2")
            .bind(subject_id)
            .bind(date)
            .execute(&mut *tx)
            .await?;

        let mut inserted = 0;
        if !entries.is_empty() {
            let mut builder = QueryBuilder::new(
                "INSERT INTO attendance (student_id, subject_id, date, status, marked_by, remarks) ",
            );
            builder.push_values(entries, |mut b, entry| {
                b.push_bind(entry.student_id)
                    .push_bind(subject_id)
                    .push_bind(date)
                    .push_bind(&entry.status)
                    .push_bind(marked_by)
                    .push_bind(&entry.remarks);
            });
            inserted = builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        tracing::debug!(subject_id, %date, inserted, "Replaced attendance roster");
        Ok(inserted)
    }

    /// Present/total tally for one (student, subject) pair.
    pub async fn tally(
        pool: &PgPool,
        student_id: DbId,
        subject_id: DbId,
    ) -> Result<AttendanceTally, sqlx::Error> {
        let (total, present): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'present')
             FROM attendance
             WHERE student_id = $1 AND subject_id = $2",
        )
        .bind(student_id)
        .bind(subject_id)
        .fetch_one(pool)
        .await?;
        Ok(AttendanceTally { total, present })
    }

    /// Present/total tally for a student across every subject of a class.
    pub async fn tally_for_class(
        pool: &PgPool,
        student_id: DbId,
        class_id: DbId,
    ) -> Result<AttendanceTally, sqlx::Error> {
        let (total, present): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE a.status = 'present')
             FROM attendance a
             JOIN subjects sub ON sub.id = a.subject_id
             WHERE a.student_id = $1 AND sub.class_id = $2",
        )
        .bind(student_id)
        .bind(class_id)
        .fetch_one(pool)
        .await?;
        Ok(AttendanceTally { total, present })
    }

    /// Attendance rows for subjects taught by one faculty member, with
    /// optional additive subject/student/date-range filters.
    pub async fn list_for_faculty(
        pool: &PgPool,
        faculty_id: DbId,
        subject_id: Option<DbId>,
        student_id: Option<DbId>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE sub.faculty_id = $1
               AND ($2::bigint IS NULL OR a.subject_id = $2)
               AND ($3::bigint IS NULL OR a.student_id = $3)
               AND ($4::date IS NULL OR a.date >= $4)
               AND ($5::date IS NULL OR a.date <= $5)
             ORDER BY a.date DESC, a.student_id ASC"
        );
        sqlx::query_as::<_, AttendanceDetail>(&query)
            .bind(faculty_id)
            .bind(subject_id)
            .bind(student_id)
            .bind(date_from)
            .bind(date_to)
            .fetch_all(pool)
            .await
    }

    /// A student's own attendance rows with optional filters.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
        subject_id: Option<DbId>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE a.student_id = $1
               AND ($2::bigint IS NULL OR a.subject_id = $2)
               AND ($3::date IS NULL OR a.date >= $3)
               AND ($4::date IS NULL OR a.date <= $4)
             ORDER BY a.date DESC"
        );
        sqlx::query_as::<_, AttendanceDetail>(&query)
            .bind(student_id)
            .bind(subject_id)
            .bind(date_from)
            .bind(date_to)
            .fetch_all(pool)
            .await
    }

    /// Admin report: all attendance rows with optional class/subject/date
    /// filters, no ownership restriction.
    pub async fn report(
        pool: &PgPool,
        class_id: Option<DbId>,
        subject_id: Option<DbId>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::bigint IS NULL OR s.class_id = $1)
               AND ($2::bigint IS NULL OR a.subject_id = $2)
               AND ($3::date IS NULL OR a.date >= $3)
               AND ($4::date IS NULL OR a.date <= $4)
             ORDER BY a.date DESC"
        );
        sqlx::query_as::<_, AttendanceDetail>(&query)
            .bind(class_id)
            .bind(subject_id)
            .bind(date_from)
            .bind(date_to)
            .fetch_all(pool)
            .await
    }

    /// Number of attendance rows recorded on `date` for one faculty
    /// member's subjects (faculty dashboard).
    pub async fn count_on_date_for_faculty(
        pool: &PgPool,
        faculty_id: DbId,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*)
             FROM attendance a
             JOIN subjects sub ON sub.id = a.subject_id
             WHERE sub.faculty_id = $1 AND a.date = $2",
        )
        .bind(faculty_id)
        .bind(date)
        .fetch_one(pool)
        .await
    }
}
