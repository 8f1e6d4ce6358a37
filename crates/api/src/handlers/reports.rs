//! Admin report handlers: attendance and marks across every class.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campus_core::attendance::AttendanceTally;
use campus_core::types::DbId;
use campus_db::models::{AttendanceDetail, MarkDetail};
use campus_db::repositories::{AttendanceRepo, MarkRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /admin/attendance-report`.
#[derive(Debug, Deserialize)]
pub struct AttendanceReportQuery {
    pub class_id: Option<DbId>,
    pub subject_id: Option<DbId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Response body for `GET /admin/attendance-report`.
#[derive(Debug, Serialize)]
pub struct AttendanceReportResponse {
    pub records: Vec<AttendanceDetail>,
    /// Present/absent/percentage summary over the matching records.
    pub summary: AttendanceSummary,
}

/// Aggregate counters over one report.
#[derive(Debug, Serialize)]
pub struct AttendanceSummary {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub percentage: i64,
}

impl From<AttendanceTally> for AttendanceSummary {
    fn from(tally: AttendanceTally) -> Self {
        Self {
            total: tally.total,
            present: tally.present,
            absent: tally.absent(),
            percentage: tally.percentage(),
        }
    }
}

/// Query parameters for `GET /admin/marks-report`.
#[derive(Debug, Deserialize)]
pub struct MarksReportQuery {
    pub class_id: Option<DbId>,
    pub subject_id: Option<DbId>,
    pub assessment_type: Option<String>,
}

/// Response body for `GET /admin/marks-report`.
#[derive(Debug, Serialize)]
pub struct MarksReportResponse {
    pub records: Vec<MarkDetail>,
}

/// GET /api/admin/attendance-report
///
/// Every attendance row matching the filters, with a present/absent
/// summary computed over the same rows.
pub async fn attendance_report(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<AttendanceReportQuery>,
) -> AppResult<Json<AttendanceReportResponse>> {
    let records = AttendanceRepo::report(
        &state.pool,
        query.class_id,
        query.subject_id,
        query.date_from,
        query.date_to,
    )
    .await?;

    let present = records.iter().filter(|r| r.status == "present").count() as i64;
    let tally = AttendanceTally {
        total: records.len() as i64,
        present,
    };

    Ok(Json(AttendanceReportResponse {
        records,
        summary: tally.into(),
    }))
}

/// GET /api/admin/marks-report
pub async fn marks_report(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<MarksReportQuery>,
) -> AppResult<Json<MarksReportResponse>> {
    let records = MarkRepo::report(
        &state.pool,
        query.class_id,
        query.subject_id,
        query.assessment_type.as_deref(),
    )
    .await?;

    Ok(Json(MarksReportResponse { records }))
}
