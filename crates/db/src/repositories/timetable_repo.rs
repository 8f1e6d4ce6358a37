//! Repository for the `timetable` table.
//!
//! Timetable entries are hard-deleted.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::timetable::{
    CreateTimetableEntry, TimetableEntry, TimetableSlot, UpdateTimetableEntry,
};

const COLUMNS: &str = "id, class_id, subject_id, day, start_time, end_time, \
                        room_no, semester, created_at, updated_at";

/// Join used by display listings: class, subject, and teaching faculty name.
const SLOT_SELECT: &str = "SELECT t.id, t.day, t.start_time, t.end_time, t.room_no, t.semester,
        t.class_id, c.name AS class_name, c.section AS class_section,
        t.subject_id, sub.name AS subject_name, sub.code AS subject_code,
        u.name AS faculty_name
     FROM timetable t
     JOIN classes c ON c.id = t.class_id
     JOIN subjects sub ON sub.id = t.subject_id
     JOIN faculty f ON f.id = sub.faculty_id
     JOIN users u ON u.id = f.user_id";

/// Day-of-week then start-time ordering shared by all listings.
const SLOT_ORDER: &str = "ORDER BY array_position(ARRAY['mon','tue','wed','thu','fri','sat'], t.day), t.start_time ASC";

/// Provides CRUD operations for timetable entries.
pub struct TimetableRepo;

impl TimetableRepo {
    /// Insert a new timetable entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTimetableEntry,
    ) -> Result<TimetableEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO timetable
                (class_id, subject_id, day, start_time, end_time, room_no, semester)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimetableEntry>(&query)
            .bind(input.class_id)
            .bind(input.subject_id)
            .bind(&input.day)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.room_no)
            .bind(input.semester)
            .fetch_one(pool)
            .await
    }

    /// List timetable slots with optional additive class/day filters.
    pub async fn list(
        pool: &PgPool,
        class_id: Option<DbId>,
        day: Option<&str>,
    ) -> Result<Vec<TimetableSlot>, sqlx::Error> {
        let query = format!(
            "{SLOT_SELECT}
             WHERE ($1::bigint IS NULL OR t.class_id = $1)
               AND ($2::text IS NULL OR t.day = $2)
             {SLOT_ORDER}"
        );
        sqlx::query_as::<_, TimetableSlot>(&query)
            .bind(class_id)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// Timetable slots for the subjects taught by one faculty member.
    pub async fn list_for_faculty(
        pool: &PgPool,
        faculty_id: DbId,
    ) -> Result<Vec<TimetableSlot>, sqlx::Error> {
        let query = format!(
            "{SLOT_SELECT}
             WHERE sub.faculty_id = $1
             {SLOT_ORDER}"
        );
        sqlx::query_as::<_, TimetableSlot>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    /// Update a timetable entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTimetableEntry,
    ) -> Result<Option<TimetableEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE timetable SET
                class_id = COALESCE($2, class_id),
                subject_id = COALESCE($3, subject_id),
                day = COALESCE($4, day),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                room_no = COALESCE($7, room_no),
                semester = COALESCE($8, semester),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimetableEntry>(&query)
            .bind(id)
            .bind(input.class_id)
            .bind(input.subject_id)
            .bind(&input.day)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.room_no)
            .bind(input.semester)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a timetable entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM timetable WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
