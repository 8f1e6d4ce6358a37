//! Handlers for the `/auth` resource (login, register, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use campus_core::error::CoreError;
use campus_core::roles::{is_valid_role, ROLE_FACULTY, ROLE_STUDENT};
use campus_db::models::{
    CreateFacultyProfile, CreateProfile, CreateStudentProfile, CreateUser, Faculty, Student,
    UserResponse,
};
use campus_db::repositories::{FacultyRepo, StudentRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /auth/register`.
///
/// The role-specific profile object must match `role`: a `student` payload
/// for the student role, a `faculty` payload for the faculty role. Admins
/// carry no profile.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    pub role: String,
    pub student: Option<CreateStudentProfile>,
    pub faculty: Option<CreateFacultyProfile>,
}

/// Successful authentication response returned by login and register.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Response body for `GET /auth/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Faculty>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a bearer token and the user.
/// The same 401 is returned whether the email is unknown, the password is
/// wrong, or the account is deactivated, so callers cannot probe for
/// registered addresses.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    input.validate()?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/auth/register
///
/// Create a user account with its role profile in one transaction and log
/// the new user in. Returns 201 with a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password).map_err(CoreError::Validation)?;

    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role: {}",
            input.role
        ))));
    }

    // Duplicate pre-check for a friendly message; the uq_users_email
    // constraint backstops races.
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
                "Student registration requires a student profile".into(),
            ))
        })?),
        ROLE_FACULTY => CreateProfile::Faculty(input.faculty.clone().ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Faculty registration requires a faculty profile".into(),
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

    let token = generate_access_token(created.user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = created.user.id, role = %created.user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: created.user.into(),
        }),
    ))
}

/// GET /api/auth/profile
///
/// Return the authenticated user together with their role profile, if any.
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let (student, faculty) = match auth.user.role.as_str() {
        ROLE_STUDENT => (
            StudentRepo::find_by_user_id(&state.pool, auth.user.id).await?,
            None,
        ),
        ROLE_FACULTY => (
            None,
            FacultyRepo::find_by_user_id(&state.pool, auth.user.id).await?,
        ),
        _ => (None, None),
    };

    Ok(Json(ProfileResponse {
        user: auth.user.into(),
        student,
        faculty,
    }))
}
