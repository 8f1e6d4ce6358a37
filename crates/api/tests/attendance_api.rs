//! HTTP-level integration tests for attendance marking, ownership scoping,
//! and percentage aggregation.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, create_class, create_faculty_member, create_student_in_class, create_subject,
    get_auth, login, post_json_auth,
};
use sqlx::PgPool;

/// Seed one class with a subject, its teacher ("owner@test.com"), and two
/// students ("s1@test.com", "s2@test.com").
///
/// Returns the subject id and the student profile ids.
async fn seed_class(pool: &PgPool) -> (i64, Vec<i64>) {
    let class = create_class(pool, "CSE", 1, "A").await;
    let (_, faculty) = create_faculty_member(pool, "Prof Owner", "owner@test.com").await;
    let subject = create_subject(pool, "Algorithms", "CS301", class.id, faculty.id).await;

    let (_, s1) = create_student_in_class(pool, "Student One", "s1@test.com", "R1", class.id).await;
    let (_, s2) = create_student_in_class(pool, "Student Two", "s2@test.com", "R2", class.id).await;

    (subject.id, vec![s1.id, s2.id])
}

fn roster_body(subject_id: i64, date: &str, statuses: &[(i64, &str)]) -> serde_json::Value {
    serde_json::json!({
        "subject_id": subject_id,
        "date": date,
        "entries": statuses
            .iter()
            .map(|(id, status)| serde_json::json!({ "student_id": id, "status": status }))
            .collect::<Vec<_>>(),
    })
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Marking attendance for another teacher's subject is a 404, exactly as
/// if the subject did not exist.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_attendance_foreign_subject_is_404(pool: PgPool) {
    let (subject_id, students) = seed_class(&pool).await;
    create_faculty_member(&pool, "Prof Other", "other@test.com").await;
    let app = common::build_test_app(pool);

    let token = login(app.clone(), "other@test.com").await;
    let body = roster_body(subject_id, "2026-08-20", &[(students[0], "present")]);
    let response = post_json_auth(app, "/api/faculty/attendance", &token, body).await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

/// A subject id that does not exist at all gives the same 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_attendance_missing_subject_is_404(pool: PgPool) {
    create_faculty_member(&pool, "Prof Lone", "lone@test.com").await;
    let app = common::build_test_app(pool);

    let token = login(app.clone(), "lone@test.com").await;
    let body = roster_body(999_999, "2026-08-20", &[(1, "present")]);
    let response = post_json_auth(app, "/api/faculty/attendance", &token, body).await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

/// Students cannot reach the faculty surface at all.
#[sqlx::test(migrations = "../db/migrations")]
async fn students_cannot_mark_attendance(pool: PgPool) {
    let (subject_id, students) = seed_class(&pool).await;
    let app = common::build_test_app(pool);

    let token = login(app.clone(), "s1@test.com").await;
    let body = roster_body(subject_id, "2026-08-20", &[(students[0], "present")]);
    let response = post_json_auth(app, "/api/faculty/attendance", &token, body).await;
    assert_status(response, StatusCode::FORBIDDEN).await;
}

// ---------------------------------------------------------------------------
// Replace semantics
// ---------------------------------------------------------------------------

/// Re-marking the same (subject, date) replaces the roster instead of
/// stacking rows: the second submission wins outright.
#[sqlx::test(migrations = "../db/migrations")]
async fn remarking_a_day_replaces_the_roster(pool: PgPool) {
    let (subject_id, students) = seed_class(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "owner@test.com").await;

    let first = roster_body(
        subject_id,
        "2026-08-20",
        &[(students[0], "present"), (students[1], "absent")],
    );
    let response = post_json_auth(app.clone(), "/api/faculty/attendance", &token, first).await;
    let json = assert_status(response, StatusCode::CREATED).await;
    assert_eq!(json["records"], 2);

    // Correction: student two was actually present.
    let second = roster_body(
        subject_id,
        "2026-08-20",
        &[(students[0], "present"), (students[1], "present")],
    );
    let response = post_json_auth(app.clone(), "/api/faculty/attendance", &token, second).await;
    let json = assert_status(response, StatusCode::CREATED).await;
    assert_eq!(json["records"], 2);

    let response = get_auth(
        app,
        &format!("/api/faculty/attendance?subject_id={subject_id}"),
        &token,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    let rows = json.as_array().expect("attendance array");
    assert_eq!(rows.len(), 2, "replace must not stack rows");
    assert!(rows.iter().all(|r| r["status"] == "present"));
}

/// An invalid status string is rejected before anything is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_rejected(pool: PgPool) {
    let (subject_id, students) = seed_class(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "owner@test.com").await;

    let body = roster_body(subject_id, "2026-08-20", &[(students[0], "maybe")]);
    let response = post_json_auth(app, "/api/faculty/attendance", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Percentage aggregation
// ---------------------------------------------------------------------------

/// 3 present out of 4 sessions rounds to 75; a subject with no sessions
/// reports 0, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn percentage_breakdown(pool: PgPool) {
    let (subject_id, students) = seed_class(&pool).await;
    // A second subject in the same class that never takes attendance.
    let class = campus_db::repositories::ClassRepo::find_by_fields(&pool, "CSE", 1, "A")
        .await
        .expect("query should succeed")
        .expect("class exists");
    let (_, faculty2) = create_faculty_member(&pool, "Prof Quiet", "quiet@test.com").await;
    create_subject(&pool, "Silent Course", "CS000", class.id, faculty2.id).await;

    let app = common::build_test_app(pool);
    let token = login(app.clone(), "owner@test.com").await;

    for (date, status) in [
        ("2026-08-17", "present"),
        ("2026-08-18", "present"),
        ("2026-08-19", "absent"),
        ("2026-08-20", "present"),
    ] {
        let body = roster_body(subject_id, date, &[(students[0], status)]);
        let response = post_json_auth(app.clone(), "/api/faculty/attendance", &token, body).await;
        assert_status(response, StatusCode::CREATED).await;
    }

    let student_token = login(app.clone(), "s1@test.com").await;
    let response = get_auth(app, "/api/student/attendance/percentage", &student_token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let subjects = json["subjects"].as_array().expect("subjects array");
    assert_eq!(subjects.len(), 2);

    let attended = subjects
        .iter()
        .find(|s| s["subject_code"] == "CS301")
        .expect("attended subject present");
    assert_eq!(attended["total"], 4);
    assert_eq!(attended["present"], 3);
    assert_eq!(attended["percentage"], 75);

    let silent = subjects
        .iter()
        .find(|s| s["subject_code"] == "CS000")
        .expect("silent subject present");
    assert_eq!(silent["total"], 0);
    assert_eq!(silent["percentage"], 0);

    // Overall: 3 of 4 across both subjects.
    assert_eq!(json["overall_percentage"], 75);
}
