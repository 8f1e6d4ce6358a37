//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{classes, dashboard, notices, reports, subjects, timetable, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /dashboard           -> admin_dashboard
/// GET    /users               -> list_users
/// POST   /users               -> create_user
/// GET    /users/{id}          -> get_user
/// PUT    /users/{id}          -> update_user
/// DELETE /users/{id}          -> deactivate_user
/// GET    /classes             -> list_classes
/// POST   /classes             -> create_class
/// GET    /classes/{id}        -> get_class
/// PUT    /classes/{id}        -> update_class
/// DELETE /classes/{id}        -> delete_class
/// GET    /subjects            -> list_subjects
/// POST   /subjects            -> create_subject
/// GET    /subjects/{id}       -> get_subject
/// PUT    /subjects/{id}       -> update_subject
/// DELETE /subjects/{id}       -> delete_subject
/// GET    /timetable           -> list_timetable
/// POST   /timetable           -> create_timetable_entry
/// PUT    /timetable/{id}      -> update_timetable_entry
/// DELETE /timetable/{id}      -> delete_timetable_entry
/// GET    /notices             -> list_notices
/// POST   /notices             -> create_notice
/// PUT    /notices/{id}        -> update_notice
/// DELETE /notices/{id}        -> deactivate_notice
/// GET    /attendance-report   -> attendance_report
/// GET    /marks-report        -> marks_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::admin_dashboard))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::deactivate_user),
        )
        .route(
            "/classes",
            get(classes::list_classes).post(classes::create_class),
        )
        .route(
            "/classes/{id}",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route(
            "/subjects",
            get(subjects::list_subjects).post(subjects::create_subject),
        )
        .route(
            "/subjects/{id}",
            get(subjects::get_subject)
                .put(subjects::update_subject)
                .delete(subjects::delete_subject),
        )
        .route(
            "/timetable",
            get(timetable::list_timetable).post(timetable::create_timetable_entry),
        )
        .route(
            "/timetable/{id}",
            axum::routing::put(timetable::update_timetable_entry)
                .delete(timetable::delete_timetable_entry),
        )
        .route(
            "/notices",
            get(notices::list_notices).post(notices::create_notice),
        )
        .route(
            "/notices/{id}",
            axum::routing::put(notices::update_notice).delete(notices::deactivate_notice),
        )
        .route("/attendance-report", get(reports::attendance_report))
        .route("/marks-report", get(reports::marks_report))
}
