use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cms: CmsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    /// Seconds an external cache may serve a rendered page before revalidating.
    pub revalidate_seconds: u64,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cms: CmsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CMS_URL.to_string(),
            api_token: None,
            revalidate_seconds: 60,
            request_timeout_seconds: None,
        }
    }
}

impl CmsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Configured bearer token; blank tokens count as unset.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Base URL without a trailing slash, ready for `{base}/api{path}`.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(Path::new("config.toml"), None)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_file(path.as_ref(), None)
    }

    /// Loads with `vars` standing in for the process environment.
    pub fn load_with_vars(path: impl AsRef<Path>, vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load_with_file(path.as_ref(), Some(vars))
    }

    fn load_with_file(path: &Path, vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(vars.clone()),
        );

        let lookup = |key: &str| match &vars {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        if let Some(url) = lookup("STRAPI_URL") {
            builder = builder.set_override("cms.base_url", url)?;
        }

        if let Some(token) = lookup("STRAPI_API_TOKEN") {
            builder = builder.set_override("cms.api_token", token)?;
        }

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        let url = reqwest::Url::parse(&self.cms.base_url).map_err(|e| {
            ConfigError::Message(format!("Invalid CMS base URL '{}': {}", self.cms.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Message(format!(
                "CMS base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.query().is_some() {
            return Err(ConfigError::Message(
                "CMS base URL must not carry a query string".to_string(),
            ));
        }

        if self.cms.revalidate_seconds == 0 {
            return Err(ConfigError::Message(
                "CMS revalidate interval must be greater than 0".to_string(),
            ));
        }

        if self.cms.request_timeout_seconds == Some(0) {
            return Err(ConfigError::Message(
                "CMS request timeout must be greater than 0 when set".to_string(),
            ));
        }

        if self.cms.base_url == DEFAULT_CMS_URL {
            tracing::warn!("Using default CMS URL {} - set STRAPI_URL in production", DEFAULT_CMS_URL);
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
