//! Student handlers: read-only views scoped to the caller's own records.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campus_core::attendance::AttendanceTally;
use campus_core::types::DbId;
use campus_db::models::{
    AttendanceDetail, MarkDetail, NoticeAudience, NoticeWithAuthor, TimetableSlot,
};
use campus_db::repositories::{AttendanceRepo, MarkRepo, NoticeRepo, SubjectRepo, TimetableRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireStudent;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /student/attendance`.
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub subject_id: Option<DbId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Query parameters for `GET /student/marks`.
#[derive(Debug, Deserialize)]
pub struct MarksQuery {
    pub subject_id: Option<DbId>,
    pub assessment_type: Option<String>,
}

/// Query parameters for `GET /student/timetable`.
#[derive(Debug, Deserialize)]
pub struct TimetableQuery {
    pub day: Option<String>,
}

/// Response body for `GET /student/dashboard`.
#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    /// Overall attendance percentage across every subject of the class.
    pub attendance_percentage: i64,
    pub attendance_total: i64,
    pub attendance_present: i64,
    pub recent_marks: Vec<MarkDetail>,
    pub recent_notices: Vec<NoticeWithAuthor>,
}

/// Per-subject attendance breakdown line.
#[derive(Debug, Serialize)]
pub struct SubjectAttendance {
    pub subject_id: DbId,
    pub subject_name: String,
    pub subject_code: String,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub percentage: i64,
}

/// Response body for `GET /student/attendance/percentage`.
#[derive(Debug, Serialize)]
pub struct AttendancePercentageResponse {
    pub subjects: Vec<SubjectAttendance>,
    /// Percentage over all subjects combined.
    pub overall_percentage: i64,
}

/// Response body for `GET /student/notices`.
#[derive(Debug, Serialize)]
pub struct NoticeListResponse {
    pub notices: Vec<NoticeWithAuthor>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/student/dashboard
pub async fn dashboard(
    student: RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<StudentDashboard>> {
    let student_id = student.profile.id;
    let class_id = student.profile.class_id;

    let tally = AttendanceRepo::tally_for_class(&state.pool, student_id, class_id).await?;
    let recent_marks = MarkRepo::recent_for_student(&state.pool, student_id, 5).await?;
    let recent_notices =
        NoticeRepo::list_for_audience(&state.pool, NoticeAudience::Student { class_id }, 5, 0)
            .await?;

    Ok(Json(StudentDashboard {
        attendance_percentage: tally.percentage(),
        attendance_total: tally.total,
        attendance_present: tally.present,
        recent_marks,
        recent_notices,
    }))
}

/// GET /api/student/attendance
pub async fn attendance(
    student: RequireStudent,
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<Vec<AttendanceDetail>>> {
    let records = AttendanceRepo::list_for_student(
        &state.pool,
        student.profile.id,
        query.subject_id,
        query.date_from,
        query.date_to,
    )
    .await?;
    Ok(Json(records))
}

/// GET /api/student/attendance/percentage
///
/// One line per subject of the student's class, plus the combined
/// percentage. Subjects with no attendance yet report 0.
pub async fn attendance_percentage(
    student: RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<AttendancePercentageResponse>> {
    let student_id = student.profile.id;
    let subjects = SubjectRepo::list_by_class(&state.pool, student.profile.class_id).await?;

    let mut lines = Vec::with_capacity(subjects.len());
    let mut overall = AttendanceTally {
        total: 0,
        present: 0,
    };

    for subject in subjects {
        let tally = AttendanceRepo::tally(&state.pool, student_id, subject.id).await?;
        overall.total += tally.total;
        overall.present += tally.present;
        lines.push(SubjectAttendance {
            subject_id: subject.id,
            subject_name: subject.name,
            subject_code: subject.code,
            total: tally.total,
            present: tally.present,
            absent: tally.absent(),
            percentage: tally.percentage(),
        });
    }

    Ok(Json(AttendancePercentageResponse {
        subjects: lines,
        overall_percentage: overall.percentage(),
    }))
}

/// GET /api/student/marks
pub async fn marks(
    student: RequireStudent,
    State(state): State<AppState>,
    Query(query): Query<MarksQuery>,
) -> AppResult<Json<Vec<MarkDetail>>> {
    let records = MarkRepo::list_for_student(
        &state.pool,
        student.profile.id,
        query.subject_id,
        query.assessment_type.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// GET /api/student/timetable
///
/// The timetable of the student's own class.
pub async fn timetable(
    student: RequireStudent,
    State(state): State<AppState>,
    Query(query): Query<TimetableQuery>,
) -> AppResult<Json<Vec<TimetableSlot>>> {
    let slots = TimetableRepo::list(
        &state.pool,
        Some(student.profile.class_id),
        query.day.as_deref(),
    )
    .await?;
    Ok(Json(slots))
}

/// GET /api/student/notices
///
/// Notices targeted at `all`, `students`, or the student's own class.
pub async fn notices(
    student: RequireStudent,
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<NoticeListResponse>> {
    let audience = NoticeAudience::Student {
        class_id: student.profile.class_id,
    };
    let (page, limit) = (pagination.page(), pagination.limit());

    let notices =
        NoticeRepo::list_for_audience(&state.pool, audience, limit, pagination.offset()).await?;
    let total = NoticeRepo::count_for_audience(&state.pool, audience).await?;

    Ok(Json(NoticeListResponse {
        notices,
        pagination: Pagination::new(total, page, limit),
    }))
}
