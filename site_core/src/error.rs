//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Failed to fetch {path}: {status} {reason}")]
    Fetch {
        path: String,
        status: u16,
        reason: String,
    },

    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid content from {path}: {message}")]
    InvalidContent { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// True for failures that originate at the CMS rather than in this process.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Fetch { .. } | AppError::Transport { .. } | AppError::InvalidContent { .. }
        )
    }

    /// HTTP status of a failed CMS response, if the failure was one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            err @ (AppError::Fetch { .. } | AppError::Transport { .. } | AppError::InvalidContent { .. }) => {
                tracing::error!("Upstream content error: {}", err);
                (StatusCode::BAD_GATEWAY, "Content service unavailable".to_string())
            }
            AppError::Config(err) => {
                tracing::error!("Configuration error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::JsonError(err) => {
                tracing::error!("JSON error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
