//! Faculty handlers: own subjects, attendance marking, marks entry.
//!
//! Every attendance/marks operation that names a subject resolves it through
//! `SubjectRepo::find_owned`, which scopes the lookup to the calling faculty
//! member. A subject that exists but belongs to someone else is
//! indistinguishable from one that does not exist: both are 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::{
    AttendanceDetail, AttendanceEntry, MarkDetail, MarkEntry, NoticeAudience, NoticeWithAuthor,
    RosterEntry, SubjectDetail, TimetableSlot,
};
use campus_db::repositories::{
    AttendanceRepo, MarkRepo, NoticeRepo, StudentRepo, SubjectRepo, TimetableRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireFaculty;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

/// Attendance statuses accepted from the roster payload, matching the
/// database CHECK constraint.
const VALID_STATUSES: [&str; 3] = ["present", "absent", "late"];

/// Assessment types accepted for marks, matching the database CHECK
/// constraint.
const VALID_ASSESSMENT_TYPES: [&str; 5] = ["internal", "external", "assignment", "quiz", "project"];

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /faculty/attendance`.
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub subject_id: DbId,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

/// Request body for `POST /faculty/marks`.
#[derive(Debug, Deserialize)]
pub struct AddMarksRequest {
    pub subject_id: DbId,
    pub entries: Vec<MarkEntry>,
}

/// Query parameters for `GET /faculty/attendance`.
#[derive(Debug, Deserialize)]
pub struct ListAttendanceQuery {
    pub subject_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Query parameters for `GET /faculty/marks`.
#[derive(Debug, Deserialize)]
pub struct ListMarksQuery {
    pub subject_id: Option<DbId>,
    pub student_id: Option<DbId>,
    pub assessment_type: Option<String>,
}

/// Response body for `GET /faculty/dashboard`.
#[derive(Debug, Serialize)]
pub struct FacultyDashboard {
    pub total_subjects: i64,
    /// Distinct students across every class the caller teaches.
    pub total_students: i64,
    /// Attendance rows recorded today for the caller's subjects.
    pub attendance_marked_today: i64,
    pub recent_notices: Vec<NoticeWithAuthor>,
}

/// Response body for `GET /faculty/notices`.
#[derive(Debug, Serialize)]
pub struct NoticeListResponse {
    pub notices: Vec<NoticeWithAuthor>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/faculty/dashboard
pub async fn dashboard(
    faculty: RequireFaculty,
    State(state): State<AppState>,
) -> AppResult<Json<FacultyDashboard>> {
    let faculty_id = faculty.profile.id;
    let today = chrono::Utc::now().date_naive();

    let total_subjects = SubjectRepo::count_by_faculty(&state.pool, faculty_id).await?;
    let total_students = StudentRepo::count_taught_by(&state.pool, faculty_id).await?;
    let attendance_marked_today =
        AttendanceRepo::count_on_date_for_faculty(&state.pool, faculty_id, today).await?;
    let recent_notices =
        NoticeRepo::list_for_audience(&state.pool, NoticeAudience::Faculty, 5, 0).await?;

    Ok(Json(FacultyDashboard {
        total_subjects,
        total_students,
        attendance_marked_today,
        recent_notices,
    }))
}

/// GET /api/faculty/subjects
pub async fn my_subjects(
    faculty: RequireFaculty,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubjectDetail>>> {
    let subjects = SubjectRepo::list_by_faculty(&state.pool, faculty.profile.id).await?;
    Ok(Json(subjects))
}

/// GET /api/faculty/subjects/{id}/students
///
/// The class roster for one of the caller's own subjects.
pub async fn subject_students(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<RosterEntry>>> {
    let subject = SubjectRepo::find_owned(&state.pool, id, faculty.profile.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subject",
            id,
        })?;

    let roster = StudentRepo::roster_for_class(&state.pool, subject.class_id).await?;
    Ok(Json(roster))
}

/// POST /api/faculty/attendance
///
/// Replace semantics: all existing rows for (subject, date) are deleted and
/// the submitted roster inserted in one transaction, so re-marking a day is
/// idempotent and partial failures leave the previous roster intact.
pub async fn mark_attendance(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    Json(input): Json<MarkAttendanceRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if input.entries.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Attendance entries are required".into(),
        )));
    }
    for entry in &input.entries {
        if !VALID_STATUSES.contains(&entry.status.as_str()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid attendance status: {}",
                entry.status
            ))));
        }
    }

    let subject = SubjectRepo::find_owned(&state.pool, input.subject_id, faculty.profile.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        })?;

    let records = AttendanceRepo::replace_for_subject_date(
        &state.pool,
        subject.id,
        input.date,
        faculty.auth.user.id,
        &input.entries,
    )
    .await?;

    tracing::info!(
        faculty_id = faculty.profile.id,
        subject_id = subject.id,
        date = %input.date,
        records,
        "Attendance marked"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Attendance marked successfully",
            "records": records,
        })),
    ))
}

/// GET /api/faculty/attendance
///
/// Attendance rows for the caller's subjects. When `subject_id` is given it
/// must be one of the caller's own subjects; otherwise every owned subject
/// is included.
pub async fn list_attendance(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    Query(query): Query<ListAttendanceQuery>,
) -> AppResult<Json<Vec<AttendanceDetail>>> {
    if let Some(subject_id) = query.subject_id {
        SubjectRepo::find_owned(&state.pool, subject_id, faculty.profile.id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Subject",
                id: subject_id,
            })?;
    }

    let records = AttendanceRepo::list_for_faculty(
        &state.pool,
        faculty.profile.id,
        query.subject_id,
        query.student_id,
        query.date_from,
        query.date_to,
    )
    .await?;
    Ok(Json(records))
}

/// POST /api/faculty/marks
///
/// Append semantics: every submission inserts new rows. Resubmitting the
/// same assessment duplicates it rather than replacing it.
pub async fn add_marks(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    Json(input): Json<AddMarksRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if input.entries.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Mark entries are required".into(),
        )));
    }
    for entry in &input.entries {
        if !VALID_ASSESSMENT_TYPES.contains(&entry.assessment_type.as_str()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid assessment type: {}",
                entry.assessment_type
            ))));
        }
        let max_mark = entry.max_mark.unwrap_or(100.0);
        if max_mark < 1.0 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Max mark {max_mark} must be at least 1"
            ))));
        }
        // Marks are always on a 0..=100 scale; max_mark may narrow the range
        // further but never widen it.
        if entry.mark < 0.0 || entry.mark > 100.0 || entry.mark > max_mark {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Mark {} is out of range for max mark {max_mark}",
                entry.mark
            ))));
        }
    }

    let subject = SubjectRepo::find_owned(&state.pool, input.subject_id, faculty.profile.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        })?;

    let records = MarkRepo::add_batch(&state.pool, subject.id, &input.entries).await?;

    tracing::info!(
        faculty_id = faculty.profile.id,
        subject_id = subject.id,
        records,
        "Marks added"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Marks added successfully",
            "records": records,
        })),
    ))
}

/// GET /api/faculty/marks
pub async fn list_marks(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    Query(query): Query<ListMarksQuery>,
) -> AppResult<Json<Vec<MarkDetail>>> {
    if let Some(subject_id) = query.subject_id {
        SubjectRepo::find_owned(&state.pool, subject_id, faculty.profile.id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Subject",
                id: subject_id,
            })?;
    }

    let records = MarkRepo::list_for_faculty(
        &state.pool,
        faculty.profile.id,
        query.subject_id,
        query.student_id,
        query.assessment_type.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// GET /api/faculty/timetable
pub async fn my_timetable(
    faculty: RequireFaculty,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TimetableSlot>>> {
    let slots = TimetableRepo::list_for_faculty(&state.pool, faculty.profile.id).await?;
    Ok(Json(slots))
}

/// GET /api/faculty/notices
///
/// Notices targeted at `all` or `faculty`.
pub async fn notices(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<NoticeListResponse>> {
    let (page, limit) = (pagination.page(), pagination.limit());

    let notices = NoticeRepo::list_for_audience(
        &state.pool,
        NoticeAudience::Faculty,
        limit,
        pagination.offset(),
    )
    .await?;
    let total = NoticeRepo::count_for_audience(&state.pool, NoticeAudience::Faculty).await?;

    Ok(Json(NoticeListResponse {
        notices,
        pagination: Pagination::new(total, page, limit),
    }))
}
