//! Vigil Database Layer
//!
//! SQLite persistence for reports and reporter identities. All access
//! goes through [`DbPool`], which serializes reads and writes on a
//! single connection.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

use std::path::Path;

/// Open a database at the given path and run migrations.
pub fn init_pool(path: &Path) -> DbResult<DbPool> {
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
