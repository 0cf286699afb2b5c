//! Page and content route handlers

use crate::{
    error::{AppError, Result},
    handlers::health::{handle_health, handle_readiness},
    models::{ApiResponse, Category, Global},
    render::{self, ArticleCard, ArticleListView, ArticleView, ServiceCard},
    services::DEFAULT_PAGE_SIZE,
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Page and content routes. These are the responses that carry revalidation hints.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_home))
        .route("/api/articles", get(handle_get_articles))
        .route("/api/articles/:slug", get(handle_get_article))
        .route("/api/categories", get(handle_get_categories))
        .route("/api/categories/:slug", get(handle_get_category))
        .route("/api/services/:slug", get(handle_get_service))
        .route("/api/global", get(handle_get_global))
}

/// Probes answer live on every request and are never cached.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/ready", get(handle_readiness))
}

async fn handle_home(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET / - rendering homepage");

    let page = render::render_homepage(state.content.as_ref()).await;
    Json(ApiResponse::success(page))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticlesQuery {
    page: Option<u32>,
    page_size: Option<u32>,
}

async fn handle_get_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> Result<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    info!("GET /api/articles - page: {}, pageSize: {}", page, page_size);

    if page == 0 {
        return Err(AppError::BadRequest("page must be at least 1".to_string()));
    }

    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "pageSize must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }

    let envelope = state.content.articles(page, page_size).await?;
    let media = state.content.media();

    let view = ArticleListView {
        pagination: envelope.pagination(),
        articles: envelope
            .data
            .iter()
            .map(|article| ArticleCard::from_article(article, media))
            .collect(),
    };

    Ok(Json(ApiResponse::success(view)))
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub preview: bool,
}

async fn handle_get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PreviewQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/articles/{} - preview: {}", slug, params.preview);

    let article = state
        .content
        .article_by_slug(&slug, params.preview)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

    Ok(Json(ApiResponse::success(ArticleView::from_article(
        &article,
        state.content.media(),
    ))))
}

async fn handle_get_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /api/categories");

    let categories: Vec<Category> = state.content.categories().await?.data;
    Ok(Json(ApiResponse::success(categories)))
}

async fn handle_get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    info!("GET /api/categories/{}", slug);

    let category = state
        .content
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

    Ok(Json(ApiResponse::success(category)))
}

async fn handle_get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    info!("GET /api/services/{}", slug);

    let service = state
        .content
        .service_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service '{}' not found", slug)))?;

    Ok(Json(ApiResponse::success(ServiceCard::from_service(
        &service,
        state.content.media(),
    ))))
}

async fn handle_get_global(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /api/global");

    let global: Global = state
        .content
        .global()
        .await?
        .data
        .ok_or_else(|| AppError::NotFound("Global settings are not configured".to_string()))?;

    Ok(Json(ApiResponse::success(global)))
}
