//! Admin dashboard handler: aggregate counts across the installation.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use campus_db::repositories::{ClassRepo, FacultyRepo, NoticeRepo, StudentRepo, SubjectRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Window for the "recent registrations" counter, in days.
const RECENT_DAYS: i32 = 30;

/// Response body for `GET /admin/dashboard`.
#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub total_students: i64,
    pub total_faculty: i64,
    pub total_classes: i64,
    pub total_subjects: i64,
    pub active_notices: i64,
    /// Students registered in the last 30 days.
    pub recent_students: i64,
}

/// GET /api/admin/dashboard
pub async fn admin_dashboard(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<AdminDashboard>> {
    let total_students = StudentRepo::count(&state.pool).await?;
    let total_faculty = FacultyRepo::count(&state.pool).await?;
    let total_classes = ClassRepo::count(&state.pool).await?;
    let total_subjects = SubjectRepo::count(&state.pool).await?;
    let active_notices = NoticeRepo::count_active(&state.pool).await?;
    let recent_students = StudentRepo::count_recent(&state.pool, RECENT_DAYS).await?;

    Ok(Json(AdminDashboard {
        total_students,
        total_faculty,
        total_classes,
        total_subjects,
        active_notices,
        recent_students,
    }))
}
