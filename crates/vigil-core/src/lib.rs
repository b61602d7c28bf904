//! Vigil Core Library
//!
//! Domain models and business logic for the vigil incident-report
//! service: report lifecycle, anonymous identities, and the in-process
//! notification bus.

pub mod bus;
pub mod error;
pub mod identity;
pub mod report;

pub use error::{VigilError, VigilResult};
