//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the
//! `create_users` migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_FACULTY: &str = "faculty";
pub const ROLE_STUDENT: &str = "student";

/// Returns `true` if `role` is one of the three known role names.
pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_ADMIN | ROLE_FACULTY | ROLE_STUDENT)
}
