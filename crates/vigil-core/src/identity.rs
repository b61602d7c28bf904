//! Anonymous reporter identity issuance.
//!
//! Ids are `USER_` plus nine uppercase alphanumeric characters, a space
//! of 36^9 values. Collisions are vanishingly rare and absorbed by the
//! idempotent registration, so callers never see one.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::VigilResult;
use vigil_db::queries::reporters as queries;
use vigil_db::DbPool;

const ID_PREFIX: &str = "USER_";
const ID_SUFFIX_LEN: usize = 9;

/// Mint a fresh anonymous reporter id and register it.
pub fn issue_reporter_id(pool: &DbPool) -> VigilResult<String> {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    let id = format!("{}{}", ID_PREFIX, suffix);

    queries::register_reporter(pool, &id)?;
    Ok(id)
}
