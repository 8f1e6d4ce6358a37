//! Admin handlers for subject management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::{CreateSubject, Subject, SubjectDetail, UpdateSubject};
use campus_db::repositories::{ClassRepo, FacultyRepo, SubjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

/// Query parameters for `GET /admin/subjects`.
#[derive(Debug, Deserialize)]
pub struct ListSubjectsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Restrict to one class.
    pub class_id: Option<DbId>,
}

/// Response body for `GET /admin/subjects`.
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<SubjectDetail>,
    pub pagination: Pagination,
}

/// Shared range checks for create and update payloads.
fn validate_ranges(credits: Option<i32>, semester: Option<i32>) -> Result<(), AppError> {
    if let Some(credits) = credits {
        if !(1..=6).contains(&credits) {
            return Err(AppError::Core(CoreError::Validation(
                "Credits must be between 1 and 6".into(),
            )));
        }
    }
    if let Some(semester) = semester {
        if !(1..=8).contains(&semester) {
            return Err(AppError::Core(CoreError::Validation(
                "Semester must be between 1 and 8".into(),
            )));
        }
    }
    Ok(())
}

/// GET /api/admin/subjects
pub async fn list_subjects(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListSubjectsQuery>,
) -> AppResult<Json<SubjectListResponse>> {
    let pagination = PaginationParams {
        page: query.page,
        limit: query.limit,
    };
    let (page, limit) = (pagination.page(), pagination.limit());

    let subjects =
        SubjectRepo::list(&state.pool, query.class_id, limit, pagination.offset()).await?;
    let total = SubjectRepo::count_filtered(&state.pool, query.class_id).await?;

    Ok(Json(SubjectListResponse {
        subjects,
        pagination: Pagination::new(total, page, limit),
    }))
}

/// POST /api/admin/subjects
///
/// The referenced class and faculty must exist; the subject code must be
/// unique (pre-checked, with uq_subjects_code as the race backstop).
pub async fn create_subject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSubject>,
) -> AppResult<(StatusCode, Json<Subject>)> {
    validate_ranges(Some(input.credits), Some(input.semester))?;

    if ClassRepo::find_by_id(&state.pool, input.class_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: input.class_id,
        }));
    }
    if FacultyRepo::find_by_id(&state.pool, input.faculty_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Faculty",
            id: input.faculty_id,
        }));
    }

    if SubjectRepo::find_by_code(&state.pool, &input.code)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(format!(
            "Subject code already exists: {}",
            input.code
        ))));
    }

    let subject = SubjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// GET /api/admin/subjects/{id}
pub async fn get_subject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subject",
            id,
        })?;
    Ok(Json(subject))
}

/// PUT /api/admin/subjects/{id}
pub async fn update_subject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubject>,
) -> AppResult<Json<Subject>> {
    validate_ranges(input.credits, input.semester)?;

    let subject = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subject",
            id,
        })?;
    Ok(Json(subject))
}

/// DELETE /api/admin/subjects/{id}
///
/// Hard delete. Attendance and marks rows cascade away with the subject.
pub async fn delete_subject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = SubjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id,
        }));
    }

    Ok(Json(serde_json::json!({
        "message": "Subject deleted successfully"
    })))
}
