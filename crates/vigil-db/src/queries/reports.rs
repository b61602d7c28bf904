//! Report-related database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::params;

/// Report row from database.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub id: i64,
    pub reporter_id: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub created_at: String,
}

/// Aggregate status counts from a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRow {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

const REPORT_COLUMNS: &str =
    "id, reporter_id, category, description, location, status, created_at";

fn map_report(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReportRow> {
    Ok(ReportRow {
        id: row.get(0)?,
        reporter_id: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn query_all_reports(conn: &rusqlite::Connection) -> rusqlite::Result<Vec<ReportRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], map_report)?;
    rows.collect()
}

fn query_stats(conn: &rusqlite::Connection) -> rusqlite::Result<StatsRow> {
    conn.query_row(
        "SELECT
            COUNT(*) AS total,
            COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending,
            COALESCE(SUM(CASE WHEN status = 'in_progress' THEN 1 ELSE 0 END), 0) AS in_progress,
            COALESCE(SUM(CASE WHEN status = 'resolved' THEN 1 ELSE 0 END), 0) AS resolved
         FROM reports",
        [],
        |row| {
            Ok(StatsRow {
                total: row.get(0)?,
                pending: row.get(1)?,
                in_progress: row.get(2)?,
                resolved: row.get(3)?,
            })
        },
    )
}

/// Insert a new report and return the materialized row.
///
/// The insert and the read-back happen inside one lock scope, so the
/// returned row is exactly what was committed.
pub fn create_report(
    pool: &DbPool,
    reporter_id: &str,
    category: &str,
    description: &str,
    location: &str,
) -> DbResult<ReportRow> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO reports (reporter_id, category, description, location, status)
             VALUES (?1, ?2, ?3, ?4, 'pending')",
            params![reporter_id, category, description, location],
        )?;
        let id = conn.last_insert_rowid();

        conn.query_row(
            &format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"),
            params![id],
            map_report,
        )
        .map_err(DbError::from)
    })
}

/// Get a report by id.
pub fn get_report(pool: &DbPool, id: i64) -> DbResult<ReportRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"),
            params![id],
            map_report,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Report: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// List all reports, newest first.
///
/// The id tie-break keeps the order deterministic when several rows
/// share a created_at second.
pub fn list_reports(pool: &DbPool) -> DbResult<Vec<ReportRow>> {
    pool.with_conn(|conn| query_all_reports(conn).map_err(DbError::from))
}

/// List every report and take the stats snapshot inside one lock scope,
/// so the two can never disagree within a single admin view.
pub fn list_reports_with_stats(pool: &DbPool) -> DbResult<(Vec<ReportRow>, StatsRow)> {
    pool.with_conn(|conn| {
        let reports = query_all_reports(conn)?;
        let stats = query_stats(conn)?;
        Ok((reports, stats))
    })
}

/// List all reports for one reporter, newest first.
pub fn list_reports_by_reporter(pool: &DbPool, reporter_id: &str) -> DbResult<Vec<ReportRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports
             WHERE reporter_id = ?1
             ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![reporter_id], map_report)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Update a report's status and return the post-update row.
///
/// The status string must already be validated by the caller; this
/// layer only knows about existence.
pub fn update_report_status(pool: &DbPool, id: i64, status: &str) -> DbResult<ReportRow> {
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE reports SET status = ?1 WHERE id = ?2",
            params![status, id],
        )?;
        if changed == 0 {
            return Err(DbError::NotFound(format!("Report: {}", id)));
        }

        conn.query_row(
            &format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1"),
            params![id],
            map_report,
        )
        .map_err(DbError::from)
    })
}

/// Aggregate status counts in one query (single consistent snapshot).
pub fn report_stats(pool: &DbPool) -> DbResult<StatsRow> {
    pool.with_conn(|conn| query_stats(conn).map_err(DbError::from))
}
