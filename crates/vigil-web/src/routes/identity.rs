//! Anonymous identity issuance.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::routes::error_response;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdResponse {
    pub reporter_id: String,
}

pub async fn generate_reporter_id(
    State(state): State<AppState>,
) -> Result<Json<GenerateIdResponse>, (StatusCode, String)> {
    let reporter_id = vigil_core::identity::issue_reporter_id(&state.db).map_err(error_response)?;

    Ok(Json(GenerateIdResponse { reporter_id }))
}
