//! HTTP-level integration tests for marks entry: append-only semantics,
//! ownership scoping, and the student's own view.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, create_class, create_faculty_member, create_student_in_class, create_subject,
    get_auth, login, post_json_auth,
};
use sqlx::PgPool;

/// Seed one class with a subject, its teacher ("prof@test.com"), and one
/// student ("stu@test.com"). Returns the subject id and student profile id.
async fn seed(pool: &PgPool) -> (i64, i64) {
    let class = create_class(pool, "CSE", 2, "A").await;
    let (_, faculty) = create_faculty_member(pool, "Prof", "prof@test.com").await;
    let subject = create_subject(pool, "Databases", "CS401", class.id, faculty.id).await;
    let (_, student) = create_student_in_class(pool, "Student", "stu@test.com", "R1", class.id).await;
    (subject.id, student.id)
}

fn marks_body(subject_id: i64, entries: &[(i64, f64)]) -> serde_json::Value {
    serde_json::json!({
        "subject_id": subject_id,
        "entries": entries
            .iter()
            .map(|(id, mark)| serde_json::json!({
                "student_id": id,
                "mark": mark,
                "assessment_type": "internal",
            }))
            .collect::<Vec<_>>(),
    })
}

/// Submitting the same batch twice inserts 2xN rows: marks are append-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn double_submission_duplicates_rows(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "prof@test.com").await;

    let body = marks_body(subject_id, &[(student_id, 42.0)]);
    for _ in 0..2 {
        let response =
            post_json_auth(app.clone(), "/api/faculty/marks", &token, body.clone()).await;
        let json = assert_status(response, StatusCode::CREATED).await;
        assert_eq!(json["records"], 1);
    }

    let response = get_auth(
        app,
        &format!("/api/faculty/marks?subject_id={subject_id}"),
        &token,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    let rows = json.as_array().expect("marks array");
    assert_eq!(rows.len(), 2, "append-only: both submissions must persist");
}

/// Adding marks to a subject the caller does not teach is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn marks_foreign_subject_is_404(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    create_faculty_member(&pool, "Prof Other", "other@test.com").await;
    let app = common::build_test_app(pool);

    let token = login(app.clone(), "other@test.com").await;
    let body = marks_body(subject_id, &[(student_id, 10.0)]);
    let response = post_json_auth(app, "/api/faculty/marks", &token, body).await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

/// A mark above its max is rejected before anything is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_above_max_rejected(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "prof@test.com").await;

    let body = marks_body(subject_id, &[(student_id, 142.0)]);
    let response = post_json_auth(app, "/api/faculty/marks", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

/// The 0..=100 scale is absolute: a raised max_mark does not admit marks
/// above 100, and nothing is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn mark_above_100_rejected_even_under_larger_max(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone(), "prof@test.com").await;

    let body = serde_json::json!({
        "subject_id": subject_id,
        "entries": [{
            "student_id": student_id,
            "mark": 150.0,
            "max_mark": 200.0,
            "assessment_type": "internal",
        }],
    });
    let response = post_json_auth(app, "/api/faculty/marks", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM marks")
        .fetch_one(&pool)
        .await
        .expect("count query");
    assert_eq!(count, 0, "rejected batch must not persist");
}

/// An unknown assessment type is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_assessment_type_rejected(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "prof@test.com").await;

    let body = serde_json::json!({
        "subject_id": subject_id,
        "entries": [{
            "student_id": student_id,
            "mark": 10.0,
            "assessment_type": "vibes",
        }],
    });
    let response = post_json_auth(app, "/api/faculty/marks", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

/// Students see their own marks with defaults applied (max_mark 100).
#[sqlx::test(migrations = "../db/migrations")]
async fn student_sees_own_marks(pool: PgPool) {
    let (subject_id, student_id) = seed(&pool).await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "prof@test.com").await;

    let body = marks_body(subject_id, &[(student_id, 87.5)]);
    let response = post_json_auth(app.clone(), "/api/faculty/marks", &token, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let student_token = login(app.clone(), "stu@test.com").await;
    let response = get_auth(app, "/api/student/marks", &student_token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let rows = json.as_array().expect("marks array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mark"], 87.5);
    assert_eq!(rows[0]["max_mark"], 100.0);
    assert_eq!(rows[0]["subject_code"], "CS401");
}
