//! HTTP client for the CMS REST API

use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use validator::Validate;

use crate::{
    cms::{media::MediaResolver, query::ContentQuery},
    config::CmsConfig,
    error::{AppError, Result},
    models::Envelope,
};

/// Shared CMS client. Cloning is cheap and reuses the connection pool.
#[derive(Clone)]
pub struct CmsClient {
    http: Client,
    config: Arc<CmsConfig>,
    media: MediaResolver,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: Client, config: CmsConfig) -> Self {
        let media = MediaResolver::new(config.origin());
        Self {
            http,
            config: Arc::new(config),
            media,
        }
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    /// `{base}/api{path}?{query}` with the query url-encoded.
    pub fn endpoint(&self, path: &str, query: &ContentQuery) -> Result<Url> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        let mut url = Url::parse(&format!("{}/api{}", self.config.origin(), path))
            .map_err(|e| AppError::BadRequest(format!("Invalid CMS path '{}': {}", path, e)))?;

        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Issues the GET and decodes the envelope. Non-2xx statuses fail with
    /// [`AppError::Fetch`]; bodies that do not match `T` fail with
    /// [`AppError::InvalidContent`].
    pub async fn fetch<T>(&self, path: &str, query: &ContentQuery) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, query)?;
        debug!(url = %url, "Fetching CMS content");

        let mut request = self
            .http
            .get(url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.config.api_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| AppError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "CMS returned an error status");
            return Err(AppError::Fetch {
                path: path.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await.map_err(|source| AppError::Transport {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| AppError::InvalidContent {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetches a single-type entry. `data: null` is a valid, empty result.
    pub async fn fetch_entry<T>(&self, path: &str, query: &ContentQuery) -> Result<Envelope<Option<T>>>
    where
        T: DeserializeOwned + Validate,
    {
        let envelope = self.fetch::<Option<T>>(path, query).await?;

        if let Some(entry) = &envelope.data {
            check(path, None, entry)?;
        }

        Ok(envelope)
    }

    pub async fn fetch_collection<T>(&self, path: &str, query: &ContentQuery) -> Result<Envelope<Vec<T>>>
    where
        T: DeserializeOwned + Validate,
    {
        let envelope = self.fetch::<Vec<T>>(path, query).await?;

        for (index, entry) in envelope.data.iter().enumerate() {
            check(path, Some(index), entry)?;
        }

        Ok(envelope)
    }

    /// First entry of a filtered collection, or `None` when nothing matches.
    pub async fn fetch_first<T>(&self, path: &str, query: &ContentQuery) -> Result<Option<T>>
    where
        T: DeserializeOwned + Validate,
    {
        Ok(self.fetch_collection::<T>(path, query).await?.into_first())
    }
}

fn check<T: Validate>(path: &str, index: Option<usize>, entry: &T) -> Result<()> {
    entry.validate().map_err(|errors| AppError::InvalidContent {
        path: path.to_string(),
        message: match index {
            Some(index) => format!("entry {}: {}", index, errors),
            None => errors.to_string(),
        },
    })
}
