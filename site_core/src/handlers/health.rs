//! Liveness and readiness probes

use crate::{error::AppError, models::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, warn};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(serde_json::json!({
        "status": "alive",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp()
    }))))
}

/// Pages render from fallback content when the CMS is down, so readiness
/// reports the CMS as degraded instead of failing the probe.
pub async fn handle_readiness(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /ready - Readiness probe");

    let cms_status = match state.content.global().await {
        Ok(_) => "reachable",
        // The CMS answered, even if with an error status.
        Err(e) if !matches!(e, AppError::Transport { .. }) => {
            warn!("CMS answered readiness check with an error: {}", e);
            "reachable"
        }
        Err(e) => {
            warn!("CMS unreachable, pages will use fallback content: {}", e);
            "unreachable"
        }
    };

    let status = if cms_status == "reachable" { "ready" } else { "degraded" };

    (StatusCode::OK, Json(ApiResponse::success(serde_json::json!({
        "status": status,
        "cms": cms_status,
        "timestamp": chrono::Utc::now().timestamp()
    }))))
}
