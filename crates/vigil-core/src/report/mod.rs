//! Report lifecycle service.
//!
//! The only place that mutates report state. Writes go to the store
//! first; the matching bus publish happens strictly after the store has
//! returned the committed row, so a subscriber can always re-fetch a
//! consistent row for any id it receives.

pub mod model;

use crate::bus::NotificationBus;
use crate::error::{VigilError, VigilResult};
use model::{AdminView, Report, ReportStats, ReportStatus};
use vigil_db::queries::reports as queries;
use vigil_db::{DbError, DbPool};

fn require_field<'a>(name: &str, value: &'a str) -> VigilResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VigilError::validation(format!(
            "Field '{}' is required",
            name
        )));
    }
    Ok(trimmed)
}

/// Validate and persist a new report, then announce it on the bus.
pub fn submit_report(
    pool: &DbPool,
    bus: &NotificationBus,
    reporter_id: &str,
    category: &str,
    description: &str,
    location: &str,
) -> VigilResult<Report> {
    let reporter_id = require_field("reporterId", reporter_id)?;
    let category = require_field("category", category)?;
    let description = require_field("description", description)?;
    let location = require_field("location", location)?;

    let row = queries::create_report(pool, reporter_id, category, description, location)?;
    let report = Report::from_row(row);

    bus.publish_new_report(&report);
    Ok(report)
}

/// Move a report to a new status, then announce the change on the bus.
///
/// Any status may move to any other, including a no-op move to the
/// same status.
pub fn update_report_status(
    pool: &DbPool,
    bus: &NotificationBus,
    id: i64,
    status: &str,
) -> VigilResult<Report> {
    let status = ReportStatus::from_str(status)
        .ok_or_else(|| VigilError::InvalidStatus(status.to_string()))?;

    let row = queries::update_report_status(pool, id, status.as_str()).map_err(|e| match e {
        DbError::NotFound(_) => VigilError::ReportNotFound(id),
        e => VigilError::Database(e),
    })?;
    let report = Report::from_row(row);

    bus.publish_status_change(&report);
    Ok(report)
}

/// Get a single report by id.
pub fn get_report(pool: &DbPool, id: i64) -> VigilResult<Report> {
    let row = queries::get_report(pool, id).map_err(|e| match e {
        DbError::NotFound(_) => VigilError::ReportNotFound(id),
        e => VigilError::Database(e),
    })?;
    Ok(Report::from_row(row))
}

/// All reports (newest first) plus a stats snapshot taken in the same
/// lock scope, so the counts always describe the listed rows.
pub fn list_for_admin(pool: &DbPool) -> VigilResult<AdminView> {
    let (rows, stats) = queries::list_reports_with_stats(pool)?;
    Ok(AdminView {
        reports: rows.into_iter().map(Report::from_row).collect(),
        stats: ReportStats::from_row(stats),
    })
}

/// All reports for one reporter, newest first.
pub fn list_for_reporter(pool: &DbPool, reporter_id: &str) -> VigilResult<Vec<Report>> {
    let rows = queries::list_reports_by_reporter(pool, reporter_id)?;
    Ok(rows.into_iter().map(Report::from_row).collect())
}

/// Current status counts.
pub fn stats(pool: &DbPool) -> VigilResult<ReportStats> {
    let row = queries::report_stats(pool)?;
    Ok(ReportStats::from_row(row))
}
