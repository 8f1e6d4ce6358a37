//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireFaculty`] -- Requires the `faculty` role and loads the faculty profile.
//! - [`rbac::RequireStudent`] -- Requires the `student` role and loads the student profile.

pub mod auth;
pub mod rbac;
