//! Admin handlers for timetable management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::{CreateTimetableEntry, TimetableEntry, TimetableSlot, UpdateTimetableEntry};
use campus_db::repositories::{ClassRepo, SubjectRepo, TimetableRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Days accepted by the timetable, matching the database CHECK constraint.
const VALID_DAYS: [&str; 6] = ["mon", "tue", "wed", "thu", "fri", "sat"];

/// Query parameters for `GET /admin/timetable`.
#[derive(Debug, Deserialize)]
pub struct ListTimetableQuery {
    pub class_id: Option<DbId>,
    pub day: Option<String>,
}

fn validate_day(day: &str) -> Result<(), AppError> {
    if !VALID_DAYS.contains(&day) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid day: {day} (expected mon..sat)"
        ))));
    }
    Ok(())
}

/// GET /api/admin/timetable
///
/// Unpaginated: a timetable is small and always rendered whole.
pub async fn list_timetable(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListTimetableQuery>,
) -> AppResult<Json<Vec<TimetableSlot>>> {
    if let Some(day) = &query.day {
        validate_day(day)?;
    }
    let slots = TimetableRepo::list(&state.pool, query.class_id, query.day.as_deref()).await?;
    Ok(Json(slots))
}

/// POST /api/admin/timetable
pub async fn create_timetable_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTimetableEntry>,
) -> AppResult<(StatusCode, Json<TimetableEntry>)> {
    validate_day(&input.day)?;
    if input.end_time <= input.start_time {
        return Err(AppError::Core(CoreError::Validation(
            "End time must be after start time".into(),
        )));
    }

    if ClassRepo::find_by_id(&state.pool, input.class_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: input.class_id,
        }));
    }
    if SubjectRepo::find_by_id(&state.pool, input.subject_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }));
    }

    let entry = TimetableRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/admin/timetable/{id}
pub async fn update_timetable_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTimetableEntry>,
) -> AppResult<Json<TimetableEntry>> {
    if let Some(day) = &input.day {
        validate_day(day)?;
    }
    if let (Some(start), Some(end)) = (input.start_time, input.end_time) {
        if end <= start {
            return Err(AppError::Core(CoreError::Validation(
                "End time must be after start time".into(),
            )));
        }
    }

    let entry = TimetableRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Timetable entry",
            id,
        })?;
    Ok(Json(entry))
}

/// DELETE /api/admin/timetable/{id}
///
/// Hard delete; a removed slot has no history worth keeping.
pub async fn delete_timetable_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = TimetableRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Timetable entry",
            id,
        }));
    }

    Ok(Json(serde_json::json!({
        "message": "Timetable entry deleted successfully"
    })))
}
