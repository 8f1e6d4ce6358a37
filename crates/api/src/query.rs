//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for list endpoints.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for list endpoints.
const MAX_LIMIT: i64 = 100;

/// Generic 1-based pagination parameters (`?page=&limit=`).
///
/// Defaults to page 1 with 10 items; the limit is capped at 100.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// The effective page number (>= 1).
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The effective page size (1..=100).
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// The row offset for the effective page.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}
