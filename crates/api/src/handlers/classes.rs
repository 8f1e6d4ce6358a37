//! Admin handlers for class management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::{Class, CreateClass, UpdateClass};
use campus_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

/// Query parameters for `GET /admin/classes`.
#[derive(Debug, Deserialize)]
pub struct ListClassesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response body for `GET /admin/classes`.
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub classes: Vec<Class>,
    pub pagination: Pagination,
}

/// GET /api/admin/classes
pub async fn list_classes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListClassesQuery>,
) -> AppResult<Json<ClassListResponse>> {
    let pagination = PaginationParams {
        page: query.page,
        limit: query.limit,
    };
    let (page, limit) = (pagination.page(), pagination.limit());

    let classes = ClassRepo::list(&state.pool, limit, pagination.offset()).await?;
    let total = ClassRepo::count(&state.pool).await?;

    Ok(Json(ClassListResponse {
        classes,
        pagination: Pagination::new(total, page, limit),
    }))
}

/// POST /api/admin/classes
///
/// A class is unique on (name, year, section); duplicates are rejected with
/// 400 and the existing row is left untouched.
pub async fn create_class(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateClass>,
) -> AppResult<(StatusCode, Json<Class>)> {
    if !(1..=4).contains(&input.year) {
        return Err(AppError::Core(CoreError::Validation(
            "Year must be between 1 and 4".into(),
        )));
    }

    // Pre-check for a friendly message; uq_classes_name_year_section
    // backstops races.
    if ClassRepo::find_by_fields(&state.pool, &input.name, input.year, &input.section)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(format!(
            "Class {} year {} section {} already exists",
            input.name, input.year, input.section
        ))));
    }

    let class = ClassRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// GET /api/admin/classes/{id}
pub async fn get_class(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Class>> {
    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Class", id })?;
    Ok(Json(class))
}

/// PUT /api/admin/classes/{id}
pub async fn update_class(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClass>,
) -> AppResult<Json<Class>> {
    if let Some(year) = input.year {
        if !(1..=4).contains(&year) {
            return Err(AppError::Core(CoreError::Validation(
                "Year must be between 1 and 4".into(),
            )));
        }
    }

    let class = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Class", id })?;
    Ok(Json(class))
}

/// DELETE /api/admin/classes/{id}
///
/// Hard delete. Subjects referencing the class cascade away with it;
/// students referencing it block the delete at the FK.
pub async fn delete_class(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ClassRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Class", id }));
    }

    Ok(Json(serde_json::json!({
        "message": "Class deleted successfully"
    })))
}
