//! Query modules.

pub mod reporters;
pub mod reports;
