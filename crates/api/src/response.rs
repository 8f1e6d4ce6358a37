//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Pagination metadata returned by every list endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    /// Total number of rows matching the filters.
    pub total: i64,
    /// The 1-based page that was returned.
    pub page: i64,
    /// Total number of pages at the requested limit.
    pub pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self { total, page, pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        // 25 rows at 10 per page -> 3 pages.
        let p = Pagination::new(25, 2, 10);
        assert_eq!(p.pages, 3);
        assert_eq!(p.total, 25);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let p = Pagination::new(0, 1, 10);
        assert_eq!(p.pages, 0);
    }

    #[test]
    fn test_exact_multiple() {
        let p = Pagination::new(30, 1, 10);
        assert_eq!(p.pages, 3);
    }
}
