//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource or role
//! surface. Handlers delegate to the corresponding repository in `campus_db`
//! and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod faculty;
pub mod notices;
pub mod reports;
pub mod student;
pub mod subjects;
pub mod timetable;
pub mod users;
