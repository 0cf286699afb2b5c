//! Cache-Control hints so an external cache revalidates pages on a fixed interval

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue, Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{handlers::routes::PreviewQuery, AppState};

pub const NO_STORE: &str = "private, no-store";

pub fn cache_control_value(revalidate_seconds: u64) -> String {
    format!("public, s-maxage={}, stale-while-revalidate", revalidate_seconds)
}

/// Same typed query the article handler reads, so both agree on what a preview is.
fn is_preview(request: &Request<Body>) -> bool {
    Query::<PreviewQuery>::try_from_uri(request.uri())
        .map(|Query(params)| params.preview)
        .unwrap_or(false)
}

pub async fn revalidate_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> std::result::Result<Response, std::convert::Infallible> {
    let cacheable = request.method() == Method::GET;
    let preview = is_preview(&request);

    let mut response = next.run(request).await;

    if !cacheable || response.headers().contains_key(header::CACHE_CONTROL) {
        return Ok(response);
    }

    let value = if preview || !response.status().is_success() {
        NO_STORE.to_string()
    } else {
        cache_control_value(state.revalidate_seconds)
    };

    match HeaderValue::from_str(&value) {
        Ok(value) => {
            debug!(cache_control = ?value, "Setting revalidation header");
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
        Err(e) => debug!("Skipping invalid Cache-Control value {}: {}", value, e),
    }

    Ok(response)
}
