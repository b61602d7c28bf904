//! Route handlers.

pub mod admin;
pub mod identity;
pub mod reports;

use axum::http::StatusCode;
use vigil_core::VigilError;

/// Map a core error to an HTTP response.
pub(crate) fn error_response(e: VigilError) -> (StatusCode, String) {
    let status = match &e {
        VigilError::Validation(_) | VigilError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        VigilError::ReportNotFound(_) => StatusCode::NOT_FOUND,
        VigilError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
