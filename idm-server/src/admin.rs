//! Administrative endpoints for server management.

use crate::state::AppState;

use idm_db::UserRepository;

use axum::{Json, extract::State};
use http::StatusCode;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub status: String,
    pub message: String,
}

/// Destructive reset of the user directory.
///
/// Maintenance/test surface, not part of the authentication flow. Every
/// outstanding token dangles afterwards and fails the identity lookup.
pub async fn clear_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, (StatusCode, String)> {
    info!("Directory reset requested");

    UserRepository::new(state.pool.clone())
        .clear()
        .await
        .map_err(|e| {
            log::error!("Directory reset failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!("Directory reset complete");

    Ok(Json(ClearResponse {
        status: "ok".to_string(),
        message: "All users removed".to_string(),
    }))
}
