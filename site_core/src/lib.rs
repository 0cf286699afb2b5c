//! Core library for the pet-care site: CMS content client, fallback-aware
//! page rendering and the HTTP routes that serve the page models.

pub mod cms;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod render;
pub mod services;

pub use cms::{resolve_media_url, CmsClient, ContentQuery, FilterOperator, MediaResolver, PublicationStatus};
pub use config::{AppConfig, CmsConfig};
pub use error::{AppError, Result};
pub use handlers::routes::{create_routes, health_routes};
pub use render::{render_homepage, HomePageView};
pub use services::{ContentService, ContentSource};

use axum::{middleware as axum_middleware, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub content: Arc<dyn ContentSource>,
    pub revalidate_seconds: u64,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentSource>, config: &AppConfig) -> Self {
        Self {
            app_name: "We Love Pets".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            content,
            revalidate_seconds: config.cms.revalidate_seconds,
        }
    }

    /// Builds the CMS client and content service described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = CmsClient::new(config.cms.clone())?;
        let service = ContentService::new(client);
        Ok(Self::new(Arc::new(service), config))
    }
}

pub fn create_app(state: AppState) -> Router {
    let pages = create_routes().layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::revalidate::revalidate_middleware,
    ));

    Router::new()
        .merge(pages)
        .merge(health_routes())
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
