//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. The faculty and student variants additionally resolve the caller's
//! profile row, so handlers receive the profile id they need for ownership
//! checks without a second lookup.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campus_core::error::CoreError;
use campus_core::roles::{ROLE_ADMIN, ROLE_FACULTY, ROLE_STUDENT};
use campus_db::models::{Faculty, Student};
use campus_db::repositories::{FacultyRepo, StudentRepo};

use crate::error::AppError;
use crate::state::AppState;
use super::auth::AuthUser;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(auth): RequireAdmin) -> AppResult<Json<()>> {
///     // auth.user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(auth))
    }
}

/// Requires the `faculty` role and resolves the caller's faculty profile.
///
/// ```ignore
/// async fn faculty_only(faculty: RequireFaculty) -> AppResult<Json<()>> {
///     let faculty_id = faculty.profile.id;
///     Ok(Json(()))
/// }
/// ```
pub struct RequireFaculty {
    pub auth: AuthUser,
    pub profile: Faculty,
}

impl FromRequestParts<AppState> for RequireFaculty {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.user.role != ROLE_FACULTY {
            return Err(AppError::Core(CoreError::Forbidden(
                "Faculty role required".into(),
            )));
        }
        // A faculty-role user without a profile row (role changed by an
        // admin without provisioning one) is a missing resource, not a
        // permission problem.
        let profile = FacultyRepo::find_by_user_id(&state.pool, auth.user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Faculty profile not found".into()))?;
        Ok(RequireFaculty { auth, profile })
    }
}

/// Requires the `student` role and resolves the caller's student profile.
pub struct RequireStudent {
    pub auth: AuthUser,
    pub profile: Student,
}

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.user.role != ROLE_STUDENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Student role required".into(),
            )));
        }
        let profile = StudentRepo::find_by_user_id(&state.pool, auth.user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student profile not found".into()))?;
        Ok(RequireStudent { auth, profile })
    }
}
