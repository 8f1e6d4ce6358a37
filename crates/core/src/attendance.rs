//! Attendance aggregation math.
//!
//! Percentages are computed from raw present/total counts fetched by the
//! repository layer. Kept as pure functions so the rounding behavior is
//! unit-testable without a database.

use serde::Serialize;

/// Percentage of classes attended, rounded to the nearest integer.
///
/// A student with no recorded classes has 0% attendance, not an error.
pub fn attendance_percentage(present: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as i64
}

/// Present/total tally for one (student, subject) pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttendanceTally {
    pub total: i64,
    pub present: i64,
}

impl AttendanceTally {
    pub fn absent(&self) -> i64 {
        self.total - self.present
    }

    pub fn percentage(&self) -> i64 {
        attendance_percentage(self.present, self.total)
    }
}
