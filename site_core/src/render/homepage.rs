//! Homepage content loading with per-resource fallback

use serde::Serialize;
use std::future::Future;
use tracing::{info, warn};

use crate::{
    error::Result,
    models::{Envelope, Feature, Homepage, Service},
    render::fallback,
    services::ContentSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentOrigins {
    pub homepage: ContentOrigin,
    pub services: ContentOrigin,
    pub features: ContentOrigin,
}

impl ContentOrigins {
    pub fn all_live(&self) -> bool {
        [self.homepage, self.services, self.features]
            .iter()
            .all(|origin| *origin == ContentOrigin::Live)
    }
}

/// Merged homepage content. Every field is populated whether or not the CMS answered.
#[derive(Debug, Clone, PartialEq)]
pub struct HomepageContent {
    pub homepage: Homepage,
    pub services: Vec<Service>,
    pub features: Vec<Feature>,
    pub origins: ContentOrigins,
}

/// Awaits one content request, turning any failure into "no result".
pub async fn settle<T, F>(resource: &'static str, request: F) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match request.await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(resource, error = %e, "Content request failed, falling back to static content");
            None
        }
    }
}

/// Live singleton wholesale when its data is present, otherwise the fallback.
pub fn merge_entry<T>(live: Option<Envelope<Option<T>>>, fallback: impl FnOnce() -> T) -> (T, ContentOrigin) {
    match live.and_then(|envelope| envelope.data) {
        Some(entry) => (entry, ContentOrigin::Live),
        None => (fallback(), ContentOrigin::Fallback),
    }
}

/// Live collection wholesale when non-empty, otherwise the whole fallback list.
pub fn merge_collection<T>(
    live: Option<Envelope<Vec<T>>>,
    fallback: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, ContentOrigin) {
    match live.map(|envelope| envelope.data) {
        Some(entries) if !entries.is_empty() => (entries, ContentOrigin::Live),
        _ => (fallback(), ContentOrigin::Fallback),
    }
}

pub async fn load_homepage(source: &dyn ContentSource) -> HomepageContent {
    let (homepage, services, features) = tokio::join!(
        settle("homepage", source.homepage()),
        settle("services", source.services()),
        settle("features", source.features()),
    );

    let (homepage, homepage_origin) = merge_entry(homepage, fallback::homepage);
    let (services, services_origin) = merge_collection(services, fallback::services);
    let (features, features_origin) = merge_collection(features, fallback::features);

    let origins = ContentOrigins {
        homepage: homepage_origin,
        services: services_origin,
        features: features_origin,
    };

    if !origins.all_live() {
        info!(
            homepage = ?origins.homepage,
            services = ?origins.services,
            features = ?origins.features,
            "Homepage rendered with fallback content"
        );
    }

    HomepageContent {
        homepage,
        services,
        features,
        origins,
    }
}
