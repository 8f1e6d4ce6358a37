//! Admin handlers for user management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use campus_core::error::CoreError;
use campus_core::roles::{is_valid_role, ROLE_FACULTY, ROLE_STUDENT};
use campus_core::types::DbId;
use campus_db::models::{
    CreateFacultyProfile, CreateProfile, CreateStudentProfile, CreateUser, Faculty, Student,
    UpdateUser, UserResponse,
};
use campus_db::repositories::{FacultyRepo, StudentRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::Pagination;
use crate::state::AppState;

/// Query parameters for `GET /admin/users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Exact role filter.
    pub role: Option<String>,
    /// Case-insensitive substring match on name or email.
    pub search: Option<String>,
}

impl ListUsersQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    pub role: String,
    pub student: Option<CreateStudentProfile>,
    pub faculty: Option<CreateFacultyProfile>,
}

/// Response body for list endpoints: the page plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub pagination: Pagination,
}

/// A user with its role profile, for single-user reads and creation.
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Faculty>,
}

/// GET /api/admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UserListResponse>> {
    let role = query.role.as_deref();
    let search = query.search.as_deref();
    let pagination = query.pagination();
    let (page, limit) = (pagination.page(), pagination.limit());

    let users = UserRepo::list(&state.pool, role, search, limit, pagination.offset()).await?;
    let total = UserRepo::count(&state.pool, role, search).await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(Into::into).collect(),
        pagination: Pagination::new(total, page, limit),
    }))
}

/// POST /api/admin/users
///
/// Create a user with its role profile in one transaction. Same payload as
/// public registration, but available to admins for provisioning accounts.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserDetailResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password).map_err(CoreError::Validation)?;

    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role: {}",
            input.role
        ))));
    }

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(format!(
            "Email already registered: {}",
            input.email
        ))));
    }

    let profile = match input.role.as_str() {
        ROLE_STUDENT => CreateProfile::Student(input.student.clone().ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Student accounts require a student profile".into(),
            ))
        })?),
        ROLE_FACULTY => CreateProfile::Faculty(input.faculty.clone().ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Faculty accounts require a faculty profile".into(),
            ))
        })?),
        _ => CreateProfile::None,
    };

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = UserRepo::create_with_profile(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role,
        },
        &profile,
    )
    .await?;

    tracing::info!(
        admin_id = admin.user.id,
        user_id = created.user.id,
        role = %created.user.role,
        "Admin created user"
    );

    Ok((
        StatusCode::CREATED,
        Json(UserDetailResponse {
            user: created.user.into(),
            student: created.student,
            faculty: created.faculty,
        }),
    ))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDetailResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    let (student, faculty) = match user.role.as_str() {
        ROLE_STUDENT => (StudentRepo::find_by_user_id(&state.pool, id).await?, None),
        ROLE_FACULTY => (None, FacultyRepo::find_by_user_id(&state.pool, id).await?),
        _ => (None, None),
    };

    Ok(Json(UserDetailResponse {
        user: user.into(),
        student,
        faculty,
    }))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    if let Some(role) = &input.role {
        if !is_valid_role(role) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid role: {role}"
            ))));
        }
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    Ok(Json(user.into()))
}

/// DELETE /api/admin/users/{id}
///
/// Soft delete: flips `is_active` to false. The row (and its attendance
/// and marks history) survives; the user simply cannot log in any more.
pub async fn deactivate_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(admin_id = admin.user.id, user_id = id, "User deactivated");

    Ok(Json(serde_json::json!({
        "message": "User deactivated successfully"
    })))
}
