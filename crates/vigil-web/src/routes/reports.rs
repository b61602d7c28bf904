//! Report submission and reporter-facing reads.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routes::error_response;
use crate::state::AppState;
use vigil_core::report::model::Report;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub reporter_id: String,
    pub category: String,
    pub description: String,
    pub location: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResponse {
    pub success: bool,
    pub report_id: i64,
    pub message: String,
}

pub async fn submit_report(
    State(state): State<AppState>,
    Json(req): Json<SubmitReportRequest>,
) -> Result<Json<SubmitReportResponse>, (StatusCode, String)> {
    let report = vigil_core::report::submit_report(
        &state.db,
        &state.bus,
        &req.reporter_id,
        &req.category,
        &req.description,
        &req.location,
    )
    .map_err(error_response)?;

    Ok(Json(SubmitReportResponse {
        success: true,
        report_id: report.id,
        message: "Report submitted successfully".to_string(),
    }))
}

pub async fn list_reporter_reports(
    State(state): State<AppState>,
    Path(reporter_id): Path<String>,
) -> Result<Json<Vec<Report>>, (StatusCode, String)> {
    let reports =
        vigil_core::report::list_for_reporter(&state.db, &reporter_id).map_err(error_response)?;

    Ok(Json(reports))
}
