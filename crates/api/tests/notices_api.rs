//! HTTP-level integration tests for notice targeting and visibility.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, create_class, create_faculty_member, create_student_in_class, create_user,
    delete_auth, get_auth, login, post_json_auth,
};
use sqlx::PgPool;

async fn post_notice(
    app: axum::Router,
    token: &str,
    title: &str,
    target: &str,
    class_id: Option<i64>,
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "title": title,
        "content": "content",
        "target": target,
    });
    if let Some(class_id) = class_id {
        body["target_class_id"] = serde_json::json!(class_id);
    }
    let response = post_json_auth(app, "/api/admin/notices", token, body).await;
    assert_status(response, StatusCode::CREATED).await
}

/// Students see `all`, `students`, and their own class's notices; never
/// faculty-only or another class's.
#[sqlx::test(migrations = "../db/migrations")]
async fn student_visibility(pool: PgPool) {
    let class_a = create_class(&pool, "CSE", 1, "A").await;
    let class_b = create_class(&pool, "CSE", 1, "B").await;
    create_student_in_class(&pool, "Stu", "stu@test.com", "R1", class_a.id).await;
    create_user(&pool, "Admin", "admin@test.com", "admin").await;
    let app = common::build_test_app(pool);

    let admin_token = login(app.clone(), "admin@test.com").await;
    post_notice(app.clone(), &admin_token, "For everyone", "all", None).await;
    post_notice(app.clone(), &admin_token, "For students", "students", None).await;
    post_notice(app.clone(), &admin_token, "For faculty", "faculty", None).await;
    post_notice(app.clone(), &admin_token, "For class A", "class", Some(class_a.id)).await;
    post_notice(app.clone(), &admin_token, "For class B", "class", Some(class_b.id)).await;

    let token = login(app.clone(), "stu@test.com").await;
    let response = get_auth(app, "/api/student/notices", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let titles: Vec<_> = json["notices"]
        .as_array()
        .expect("notices array")
        .iter()
        .map(|n| n["title"].as_str().expect("title"))
        .collect();
    assert_eq!(json["pagination"]["total"], 3);
    assert!(titles.contains(&"For everyone"));
    assert!(titles.contains(&"For students"));
    assert!(titles.contains(&"For class A"));
    assert!(!titles.contains(&"For faculty"));
    assert!(!titles.contains(&"For class B"));
}

/// Faculty see `all` and `faculty` notices only.
#[sqlx::test(migrations = "../db/migrations")]
async fn faculty_visibility(pool: PgPool) {
    let class = create_class(&pool, "CSE", 1, "A").await;
    create_faculty_member(&pool, "Prof", "prof@test.com").await;
    create_user(&pool, "Admin", "admin@test.com", "admin").await;
    let app = common::build_test_app(pool);

    let admin_token = login(app.clone(), "admin@test.com").await;
    post_notice(app.clone(), &admin_token, "For everyone", "all", None).await;
    post_notice(app.clone(), &admin_token, "For students", "students", None).await;
    post_notice(app.clone(), &admin_token, "For faculty", "faculty", None).await;
    post_notice(app.clone(), &admin_token, "For class A", "class", Some(class.id)).await;

    let token = login(app.clone(), "prof@test.com").await;
    let response = get_auth(app, "/api/faculty/notices", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let titles: Vec<_> = json["notices"]
        .as_array()
        .expect("notices array")
        .iter()
        .map(|n| n["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"For everyone"));
    assert!(titles.contains(&"For faculty"));
}

/// A class-targeted notice without a class id is a 400; a non-class target
/// carrying one is also a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn class_target_validation(pool: PgPool) {
    let class = create_class(&pool, "CSE", 1, "A").await;
    create_user(&pool, "Admin", "admin@test.com", "admin").await;
    let app = common::build_test_app(pool);
    let token = login(app.clone(), "admin@test.com").await;

    let body = serde_json::json!({ "title": "t", "content": "c", "target": "class" });
    let response = post_json_auth(app.clone(), "/api/admin/notices", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;

    let body = serde_json::json!({
        "title": "t", "content": "c", "target": "all", "target_class_id": class.id
    });
    let response = post_json_auth(app, "/api/admin/notices", &token, body).await;
    assert_status(response, StatusCode::BAD_REQUEST).await;
}

/// Deactivating a notice hides it from every listing but keeps the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_notice_is_hidden(pool: PgPool) {
    create_user(&pool, "Admin", "admin@test.com", "admin").await;
    let app = common::build_test_app(pool.clone());
    let token = login(app.clone(), "admin@test.com").await;

    let created = post_notice(app.clone(), &token, "Ephemeral", "all", None).await;
    let id = created["id"].as_i64().expect("id");

    let response = delete_auth(app.clone(), &format!("/api/admin/notices/{id}"), &token).await;
    assert_status(response, StatusCode::OK).await;

    let response = get_auth(app, "/api/admin/notices", &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["pagination"]["total"], 0);

    // Soft delete: the row itself survives.
    let row = campus_db::repositories::NoticeRepo::find_by_id(&pool, id)
        .await
        .expect("query should succeed")
        .expect("row must still exist");
    assert!(!row.is_active);
}
