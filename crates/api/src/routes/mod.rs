pub mod admin;
pub mod auth;
pub mod faculty;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/register                     register (public)
/// /auth/profile                      current user profile (requires auth)
///
/// /admin/dashboard                   aggregate counts (admin only)
/// /admin/users                       list, create
/// /admin/users/{id}                  get, update, deactivate
/// /admin/classes                     list, create
/// /admin/classes/{id}                get, update, delete
/// /admin/subjects                    list, create
/// /admin/subjects/{id}               get, update, delete
/// /admin/timetable                   list, create
/// /admin/timetable/{id}              update, delete
/// /admin/notices                     list, create
/// /admin/notices/{id}                update, deactivate
/// /admin/attendance-report           attendance report with filters
/// /admin/marks-report                marks report with filters
///
/// /faculty/dashboard                 teaching summary (faculty only)
/// /faculty/subjects                  subjects taught by the caller
/// /faculty/subjects/{id}/students    class roster for an owned subject
/// /faculty/attendance                mark (POST, replace), list (GET)
/// /faculty/marks                     add (POST, append), list (GET)
/// /faculty/timetable                 caller's teaching slots
/// /faculty/notices                   notices visible to faculty
///
/// /student/dashboard                 attendance/marks summary (student only)
/// /student/attendance                own attendance records
/// /student/attendance/percentage     per-subject percentage breakdown
/// /student/marks                     own marks
/// /student/timetable                 class timetable
/// /student/notices                   notices visible to the student
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, register, profile).
        .nest("/auth", auth::router())
        // Admin routes (full CRUD over every entity, reports, dashboard).
        .nest("/admin", admin::router())
        // Faculty routes (own subjects, attendance, marks).
        .nest("/faculty", faculty::router())
        // Student routes (read-only views of own records).
        .nest("/student", student::router())
}
