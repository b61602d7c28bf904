//! Reporter identity queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::params;

/// Register an anonymous reporter id. Registering an id that already
/// exists is a no-op, never an error.
pub fn register_reporter(pool: &DbPool, anonymous_id: &str) -> DbResult<()> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT OR IGNORE INTO reporters (anonymous_id) VALUES (?1)",
            params![anonymous_id],
        )?;
        Ok(())
    })
}

/// Check whether a reporter id is registered.
pub fn reporter_exists(pool: &DbPool, anonymous_id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM reporters WHERE anonymous_id = ?1",
                params![anonymous_id],
                |row| row.get(0),
            )
            .map_err(DbError::from)?;
        Ok(count > 0)
    })
}
