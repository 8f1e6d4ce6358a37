//! Domain primitives shared by the db and api crates.
//!
//! - [`types`] -- common id and timestamp aliases.
//! - [`error`] -- the domain error taxonomy.
//! - [`roles`] -- well-known role name constants.
//! - [`attendance`] -- attendance percentage aggregation.

pub mod attendance;
pub mod error;
pub mod roles;
pub mod types;
