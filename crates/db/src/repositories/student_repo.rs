//! Repository for the `students` table.

use campus_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::student::{CreateStudentProfile, RosterEntry, Student};

const COLUMNS: &str = "id, user_id, reg_no, class_id, phone, address, date_of_birth, \
                        guardian_name, guardian_phone, created_at, updated_at";

/// Provides CRUD operations for student profiles.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student profile inside an open transaction.
    ///
    /// Part of user creation: the caller owns the transaction so a failed
    /// profile insert rolls back the user row too.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        input: &CreateStudentProfile,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (user_id, reg_no, class_id, phone, address, date_of_birth,
                 guardian_name, guardian_phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(user_id)
            .bind(&input.reg_no)
            .bind(input.class_id)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.date_of_birth)
            .bind(&input.guardian_name)
            .bind(&input.guardian_phone)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find the student profile linked to a user.
    ///
    /// Authorization-sensitive paths re-fetch through this instead of
    /// trusting a previously loaded object.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE user_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// The class roster: students of a class with user name/email, ordered
    /// by registration number.
    pub async fn roster_for_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<RosterEntry>, sqlx::Error> {
        sqlx::query_as::<_, RosterEntry>(
            "SELECT s.id, s.reg_no, u.name, u.email
             FROM students s
             JOIN users u ON u.id = s.user_id
             WHERE s.class_id = $1
             ORDER BY s.reg_no ASC",
        )
        .bind(class_id)
        .fetch_all(pool)
        .await
    }

    /// Total number of students.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }

    /// Number of students registered in the last `days` days.
    pub async fn count_recent(pool: &PgPool, days: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM students
             WHERE created_at >= NOW() - ($1 || ' days')::interval",
        )
        .bind(days.to_string())
        .fetch_one(pool)
        .await
    }

    /// Number of distinct students in classes that have at least one subject
    /// taught by the given faculty member.
    pub async fn count_taught_by(pool: &PgPool, faculty_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT s.id)
             FROM students s
             JOIN subjects sub ON sub.class_id = s.class_id
             WHERE sub.faculty_id = $1",
        )
        .bind(faculty_id)
        .fetch_one(pool)
        .await
    }
}
