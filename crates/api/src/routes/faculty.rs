//! Route definitions for the `/faculty` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faculty;
use crate::state::AppState;

/// Routes mounted at `/faculty`.
///
/// All routes require the `faculty` role (enforced by handler extractors).
/// Write routes additionally enforce subject ownership: a faculty member can
/// only touch attendance and marks for subjects assigned to them.
///
/// ```text
/// GET  /dashboard               -> dashboard
/// GET  /subjects                -> my_subjects
/// GET  /subjects/{id}/students  -> subject_students
/// POST /attendance              -> mark_attendance
/// GET  /attendance              -> list_attendance
/// POST /marks                   -> add_marks
/// GET  /marks                   -> list_marks
/// GET  /timetable               -> my_timetable
/// GET  /notices                 -> notices
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(faculty::dashboard))
        .route("/subjects", get(faculty::my_subjects))
        .route("/subjects/{id}/students", get(faculty::subject_students))
        .route(
            "/attendance",
            get(faculty::list_attendance).post(faculty::mark_attendance),
        )
        .route("/marks", get(faculty::list_marks).post(faculty::add_marks))
        .route("/timetable", get(faculty::my_timetable))
        .route("/notices", get(faculty::notices))
}
