//! HTTP-level integration tests for the admin surface: user management,
//! classes, subjects, pagination, and RBAC enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, create_class, create_faculty_member, create_user, delete_auth, get_auth, login,
    post_json_auth, put_json_auth,
};
use campus_db::repositories::ClassRepo;
use sqlx::PgPool;

async fn admin_token(pool: &PgPool, app: axum::Router) -> String {
    create_user(pool, "Admin", "admin@test.com", "admin").await;
    login(app, "admin@test.com").await
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

/// Non-admin roles get 403 from every /admin route.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_other_roles(pool: PgPool) {
    create_user(&pool, "Student", "student@test.com", "student").await;
    let app = common::build_test_app(pool);

    let token = login(app.clone(), "student@test.com").await;
    let response = get_auth(app, "/api/admin/users", &token).await;
    assert_status(response, StatusCode::FORBIDDEN).await;
}

/// Unauthenticated requests get 401 before any role check.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/admin/users").await;
    assert_status(response, StatusCode::UNAUTHORIZED).await;
}

// ---------------------------------------------------------------------------
// User listing and pagination
// ---------------------------------------------------------------------------

/// 25 users at limit=10: page 2 has 10 items and pages == 3.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_list_pagination(pool: PgPool) {
    for i in 0..24 {
        create_user(
            &pool,
            &format!("User {i}"),
            &format!("user{i}@test.com"),
            "student",
        )
        .await;
    }
    let app = common::build_test_app(pool.clone());
    // The admin is the 25th user.
    let token = admin_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/admin/users?page=2&limit=10", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    assert_eq!(json["users"].as_array().expect("users array").len(), 10);
    assert_eq!(json["pagination"]["total"], 25);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["pages"], 3);
}

/// The role filter restricts the list and the count together.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_list_role_filter(pool: PgPool) {
    create_user(&pool, "Student A", "sa@test.com", "student").await;
    create_user(&pool, "Student B", "sb@test.com", "student").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/admin/users?role=student", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    assert_eq!(json["users"].as_array().expect("users array").len(), 2);
    assert_eq!(json["pagination"]["total"], 2);
}

// ---------------------------------------------------------------------------
// User deactivation
// ---------------------------------------------------------------------------

/// DELETE /admin/users/{id} soft-deletes: the row survives with
/// is_active = false.
#[sqlx::test(migrations = "../db/migrations")]
async fn deactivate_user_is_soft(pool: PgPool) {
    let victim = create_user(&pool, "Victim", "victim@test.com", "student").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = delete_auth(app, &format!("/api/admin/users/{}", victim.id), &token).await;
    assert_status(response, StatusCode::OK).await;

    let row = campus_db::repositories::UserRepo::find_by_id(&pool, victim.id)
        .await
        .expect("query should succeed")
        .expect("row must still exist");
    assert!(!row.is_active);
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// Creating a duplicate (name, year, section) is a 400 and the first row
/// is left unmodified.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_class_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({ "name": "CSE", "year": 2, "section": "B" });
    let response = post_json_auth(app.clone(), "/api/admin/classes", &token, body.clone()).await;
    let first = assert_status(response, StatusCode::CREATED).await;

    let response = post_json_auth(app, "/api/admin/classes", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;

    let row = ClassRepo::find_by_id(&pool, first["id"].as_i64().expect("id"))
        .await
        .expect("query should succeed")
        .expect("first class must survive");
    assert_eq!(row.name, "CSE");
    assert_eq!(row.year, 2);
    assert_eq!(row.section, "B");
}

/// Class year outside 1..=4 is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn class_year_out_of_range(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({ "name": "CSE", "year": 7, "section": "A" });
    let response = post_json_auth(app, "/api/admin/classes", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

/// Class deletion is hard: the row is gone afterwards.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_class_is_hard(pool: PgPool) {
    let class = create_class(&pool, "ECE", 1, "A").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = delete_auth(app, &format!("/api/admin/classes/{}", class.id), &token).await;
    assert_status(response, StatusCode::OK).await;

    let row = ClassRepo::find_by_id(&pool, class.id)
        .await
        .expect("query should succeed");
    assert!(row.is_none(), "hard delete must remove the row");
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// Duplicate subject code is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_subject_code_rejected(pool: PgPool) {
    let class = create_class(&pool, "CSE", 1, "A").await;
    let (_, faculty) = create_faculty_member(&pool, "Prof", "prof@test.com").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({
        "name": "Data Structures",
        "code": "CS201",
        "class_id": class.id,
        "faculty_id": faculty.id,
        "credits": 4,
        "semester": 3
    });
    let response = post_json_auth(app.clone(), "/api/admin/subjects", &token, body.clone()).await;
    assert_status(response, StatusCode::CREATED).await;

    let response = post_json_auth(app, "/api/admin/subjects", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

/// A subject referencing a missing class is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn subject_with_unknown_class_rejected(pool: PgPool) {
    let (_, faculty) = create_faculty_member(&pool, "Prof", "prof@test.com").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({
        "name": "Ghost Course",
        "code": "GH000",
        "class_id": 999_999,
        "faculty_id": faculty.id,
        "credits": 3,
        "semester": 1
    });
    let response = post_json_auth(app, "/api/admin/subjects", &token, body).await;
    assert_status(response, StatusCode::NOT_FOUND).await;
}

/// Partial update via PUT only touches the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_user_partial(pool: PgPool) {
    let user = create_user(&pool, "Old Name", "old@test.com", "student").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({ "name": "New Name" });
    let response = put_json_auth(app, &format!("/api/admin/users/{}", user.id), &token, body).await;
    let json = assert_status(response, StatusCode::OK).await;

    assert_eq!(json["name"], "New Name");
    assert_eq!(json["email"], "old@test.com");
    assert_eq!(json["role"], "student");
}

/// A user switched to the faculty role without a matching profile row gets
/// 404 from faculty routes: the profile is a missing resource, not a
/// permission failure.
#[sqlx::test(migrations = "../db/migrations")]
async fn role_change_without_profile_is_404(pool: PgPool) {
    let user = create_user(&pool, "Switched", "switched@test.com", "student").await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let body = serde_json::json!({ "role": "faculty" });
    let response = put_json_auth(
        app.clone(),
        &format!("/api/admin/users/{}", user.id),
        &token,
        body,
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    let switched_token = login(app.clone(), "switched@test.com").await;
    let response = get_auth(app, "/api/faculty/dashboard", &switched_token).await;
    let json = assert_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["message"], "Faculty profile not found");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The dashboard counts reflect seeded rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_counts(pool: PgPool) {
    let class = create_class(&pool, "CSE", 1, "A").await;
    create_faculty_member(&pool, "Prof", "prof@test.com").await;
    common::create_student_in_class(&pool, "Stu", "stu@test.com", "R1", class.id).await;
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/admin/dashboard", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    assert_eq!(json["total_students"], 1);
    assert_eq!(json["total_faculty"], 1);
    assert_eq!(json["total_classes"], 1);
    assert_eq!(json["recent_students"], 1);
}
