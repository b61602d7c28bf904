//! Admin route handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routes::error_response;
use crate::state::AppState;
use vigil_core::report::model::{AdminView, Report, ReportStats};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    match state.auth.check_login(&req.username, &req.password) {
        Some(token) => Ok(Json(LoginResponse {
            success: true,
            token: token.to_string(),
        })),
        None => Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())),
    }
}

pub async fn list_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminView>, (StatusCode, String)> {
    state.auth.require_bearer(&headers)?;

    let view = vigil_core::report::list_for_admin(&state.db).map_err(error_response)?;
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_report_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Report>, (StatusCode, String)> {
    state.auth.require_bearer(&headers)?;

    let report = vigil_core::report::update_report_status(&state.db, &state.bus, id, &req.status)
        .map_err(error_response)?;
    Ok(Json(report))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ReportStats>, (StatusCode, String)> {
    state.auth.require_bearer(&headers)?;

    let stats = vigil_core::report::stats(&state.db).map_err(error_response)?;
    Ok(Json(stats))
}
