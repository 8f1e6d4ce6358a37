//! Shared integration-test harness: router construction and request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use campus_api::auth::jwt::JwtConfig;
use campus_api::auth::password::hash_password;
use campus_api::config::ServerConfig;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_db::models::{
    Class, CreateClass, CreateFacultyProfile, CreateProfile, CreateStudentProfile, CreateSubject,
    CreateUser, Faculty, Student, Subject, User,
};
use campus_db::repositories::{ClassRepo, SubjectRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the exact middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

/// GET a path without authentication.
#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// GET a path with a bearer token.
#[allow(dead_code)]
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// POST a JSON body without authentication.
#[allow(dead_code)]
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// POST a JSON body with a bearer token.
#[allow(dead_code)]
pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// PUT a JSON body with a bearer token.
#[allow(dead_code)]
pub async fn put_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// DELETE a path with a bearer token.
#[allow(dead_code)]
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a response status, with the body in the failure message.
#[allow(dead_code)]
pub async fn assert_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Database fixtures
// ---------------------------------------------------------------------------

/// Password used by every fixture account.
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a user directly in the database with [`TEST_PASSWORD`].
#[allow(dead_code)]
pub async fn create_user(pool: &PgPool, name: &str, email: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let created = UserRepo::create_with_profile(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
        &CreateProfile::None,
    )
    .await
    .expect("user creation should succeed");
    created.user
}

/// Create a class row.
#[allow(dead_code)]
pub async fn create_class(pool: &PgPool, name: &str, year: i32, section: &str) -> Class {
    ClassRepo::create(
        pool,
        &CreateClass {
            name: name.to_string(),
            year,
            section: section.to_string(),
        },
    )
    .await
    .expect("class creation should succeed")
}

/// Create a faculty user with its profile, returning (user, profile).
#[allow(dead_code)]
pub async fn create_faculty_member(pool: &PgPool, name: &str, email: &str) -> (User, Faculty) {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let created = UserRepo::create_with_profile(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hashed,
            role: "faculty".to_string(),
        },
        &CreateProfile::Faculty(CreateFacultyProfile {
            dept: "Computer Science".to_string(),
            designation: "Assistant Professor".to_string(),
            phone: None,
            qualification: None,
            experience: None,
        }),
    )
    .await
    .expect("faculty creation should succeed");
    let faculty = created.faculty.expect("faculty profile should exist");
    (created.user, faculty)
}

/// Create a student user in a class, returning (user, profile).
#[allow(dead_code)]
pub async fn create_student_in_class(
    pool: &PgPool,
    name: &str,
    email: &str,
    reg_no: &str,
    class_id: i64,
) -> (User, Student) {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let created = UserRepo::create_with_profile(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hashed,
            role: "student".to_string(),
        },
        &CreateProfile::Student(CreateStudentProfile {
            reg_no: reg_no.to_string(),
            class_id,
            phone: None,
            address: None,
            date_of_birth: None,
            guardian_name: None,
            guardian_phone: None,
        }),
    )
    .await
    .expect("student creation should succeed");
    let student = created.student.expect("student profile should exist");
    (created.user, student)
}

/// Create a subject taught by `faculty_id` for `class_id`.
#[allow(dead_code)]
pub async fn create_subject(
    pool: &PgPool,
    name: &str,
    code: &str,
    class_id: i64,
    faculty_id: i64,
) -> Subject {
    SubjectRepo::create(
        pool,
        &CreateSubject {
            name: name.to_string(),
            code: code.to_string(),
            class_id,
            faculty_id,
            credits: 4,
            semester: 1,
        },
    )
    .await
    .expect("subject creation should succeed")
}

/// Log in a fixture user via the API and return the bearer token.
#[allow(dead_code)]
pub async fn login(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
