//! Route definitions for the `/student` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// All routes require the `student` role (enforced by handler extractors)
/// and are read-only views scoped to the caller's own records.
///
/// ```text
/// GET /dashboard              -> dashboard
/// GET /attendance             -> attendance
/// GET /attendance/percentage  -> attendance_percentage
/// GET /marks                  -> marks
/// GET /timetable              -> timetable
/// GET /notices                -> notices
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(student::dashboard))
        .route("/attendance", get(student::attendance))
        .route(
            "/attendance/percentage",
            get(student::attendance_percentage),
        )
        .route("/marks", get(student::marks))
        .route("/timetable", get(student::timetable))
        .route("/notices", get(student::notices))
}
