//! Admin handlers for notice management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::{CreateNotice, Notice, NoticeWithAuthor, UpdateNotice};
use campus_db::repositories::{ClassRepo, NoticeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

/// Audiences accepted by a notice, matching the database CHECK constraint.
const VALID_TARGETS: [&str; 4] = ["all", "students", "faculty", "class"];

/// Priorities accepted by a notice, matching the database CHECK constraint.
const VALID_PRIORITIES: [&str; 4] = ["low", "medium", "high", "urgent"];

/// Query parameters for `GET /admin/notices`.
#[derive(Debug, Deserialize)]
pub struct ListNoticesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Restrict to one target audience.
    pub target: Option<String>,
}

/// Response body for `GET /admin/notices`.
#[derive(Debug, Serialize)]
pub struct NoticeListResponse {
    pub notices: Vec<NoticeWithAuthor>,
    pub pagination: Pagination,
}

fn validate_target(target: &str) -> Result<(), AppError> {
    if !VALID_TARGETS.contains(&target) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid target: {target}"
        ))));
    }
    Ok(())
}

fn validate_priority(priority: &str) -> Result<(), AppError> {
    if !VALID_PRIORITIES.contains(&priority) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid priority: {priority}"
        ))));
    }
    Ok(())
}

/// GET /api/admin/notices
pub async fn list_notices(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListNoticesQuery>,
) -> AppResult<Json<NoticeListResponse>> {
    if let Some(target) = &query.target {
        validate_target(target)?;
    }
    let pagination = PaginationParams {
        page: query.page,
        limit: query.limit,
    };
    let (page, limit) = (pagination.page(), pagination.limit());

    let notices = NoticeRepo::list(
        &state.pool,
        query.target.as_deref(),
        limit,
        pagination.offset(),
    )
    .await?;
    let total = NoticeRepo::count_filtered(&state.pool, query.target.as_deref()).await?;

    Ok(Json(NoticeListResponse {
        notices,
        pagination: Pagination::new(total, page, limit),
    }))
}

/// POST /api/admin/notices
///
/// A `class` target must name an existing class; every other target must
/// not carry a class id.
pub async fn create_notice(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNotice>,
) -> AppResult<(StatusCode, Json<Notice>)> {
    if input.title.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title and content are required".into(),
        )));
    }
    if let Some(target) = &input.target {
        validate_target(target)?;
    }
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }

    let target = input.target.as_deref().unwrap_or("all");
    match (target, input.target_class_id) {
        ("class", Some(class_id)) => {
            if ClassRepo::find_by_id(&state.pool, class_id).await?.is_none() {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Class",
                    id: class_id,
                }));
            }
        }
        ("class", None) => {
            return Err(AppError::Core(CoreError::Validation(
                "A class-targeted notice requires target_class_id".into(),
            )));
        }
        (_, Some(_)) => {
            return Err(AppError::Core(CoreError::Validation(
                "target_class_id is only valid when target is 'class'".into(),
            )));
        }
        (_, None) => {}
    }

    let notice = NoticeRepo::create(&state.pool, admin.user.id, &input).await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

/// PUT /api/admin/notices/{id}
pub async fn update_notice(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotice>,
) -> AppResult<Json<Notice>> {
    if let Some(target) = &input.target {
        validate_target(target)?;
    }
    if let Some(priority) = &input.priority {
        validate_priority(priority)?;
    }

    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Notice",
            id,
        })?;
    Ok(Json(notice))
}

/// DELETE /api/admin/notices/{id}
///
/// Soft delete: the notice is hidden from every listing but the row stays.
pub async fn deactivate_notice(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deactivated = NoticeRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notice",
            id,
        }));
    }

    Ok(Json(serde_json::json!({
        "message": "Notice deactivated successfully"
    })))
}
