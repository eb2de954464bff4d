//! Catalog configuration, loaded from TOML with credentials from the environment

use std::fmt;
use std::path::Path;
use std::time::Duration;

use fandom::CategoryRules;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::QueryPolicy;

pub const TMDB_API_KEY_VAR: &str = "TMDB_API_KEY";
pub const TWITCH_CLIENT_ID_VAR: &str = "TWITCH_CLIENT_ID";
pub const TWITCH_SECRET_VAR: &str = "TWITCH_SECRET";
pub const RAWG_API_KEY_VAR: &str = "RAWG_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub search: SearchPolicy,
    #[serde(default)]
    pub jikan: JikanPolicy,
    #[serde(default)]
    pub fandom: FandomPolicy,
    #[serde(default)]
    pub cast: CastPolicy,
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML file; a missing file yields the defaults
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Override credentials from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override credentials from `lookup`; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = &mut self.credentials;
        let slots = [
            (TMDB_API_KEY_VAR, &mut credentials.tmdb_api_key),
            (TWITCH_CLIENT_ID_VAR, &mut credentials.twitch_client_id),
            (TWITCH_SECRET_VAR, &mut credentials.twitch_client_secret),
            (RAWG_API_KEY_VAR, &mut credentials.rawg_api_key),
        ];
        for (name, slot) in slots {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
    }
}

/// Upstream API credentials; an empty value disables the matching adapter
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub tmdb_api_key: String,
    #[serde(default)]
    pub twitch_client_id: String,
    #[serde(default)]
    pub twitch_client_secret: String,
    #[serde(default)]
    pub rawg_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() {
                "<unset>"
            } else {
                "<redacted>"
            }
        }
        f.debug_struct("Credentials")
            .field("tmdb_api_key", &redact(&self.tmdb_api_key))
            .field("twitch_client_id", &self.twitch_client_id)
            .field("twitch_client_secret", &redact(&self.twitch_client_secret))
            .field("rawg_api_key", &redact(&self.rawg_api_key))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "HttpConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "HttpConfig::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "HttpConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Self::default_timeout_secs(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl HttpConfig {
    fn default_timeout_secs() -> u64 {
        30
    }

    fn default_connect_timeout_secs() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        format!("charlist/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Shorter queries are never dispatched
    #[serde(default = "SearchPolicy::default_min_query_len")]
    pub min_query_len: usize,
    /// Quiet period before a search-as-you-type query is dispatched
    #[serde(default = "SearchPolicy::default_debounce_ms")]
    pub debounce_ms: u64,
    /// Results requested from each source
    #[serde(default = "SearchPolicy::default_per_source_limit")]
    pub per_source_limit: u32,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            min_query_len: Self::default_min_query_len(),
            debounce_ms: Self::default_debounce_ms(),
            per_source_limit: Self::default_per_source_limit(),
        }
    }
}

impl SearchPolicy {
    fn default_min_query_len() -> usize {
        3
    }

    fn default_debounce_ms() -> u64 {
        800
    }

    fn default_per_source_limit() -> u32 {
        5
    }

    pub fn query_policy(&self) -> QueryPolicy {
        QueryPolicy {
            min_query_len: self.min_query_len,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPolicy {
    /// Pause before each character search
    #[serde(default = "JikanPolicy::default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for JikanPolicy {
    fn default() -> Self {
        Self {
            request_delay_ms: Self::default_request_delay_ms(),
        }
    }
}

impl JikanPolicy {
    fn default_request_delay_ms() -> u64 {
        500
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FandomPolicy {
    /// Wiki subdomains, queried concurrently and merged in this order
    #[serde(default = "FandomPolicy::default_wikis")]
    pub wikis: Vec<String>,
    #[serde(default = "FandomPolicy::default_results_per_wiki")]
    pub results_per_wiki: u32,
    /// Prefix for proxied images; empty to use wiki URLs as-is
    #[serde(default = "FandomPolicy::default_image_proxy")]
    pub image_proxy: String,
    #[serde(flatten)]
    pub categories: CategoryRules,
}

impl Default for FandomPolicy {
    fn default() -> Self {
        Self {
            wikis: Self::default_wikis(),
            results_per_wiki: Self::default_results_per_wiki(),
            image_proxy: Self::default_image_proxy(),
            categories: CategoryRules::default(),
        }
    }
}

impl FandomPolicy {
    fn default_wikis() -> Vec<String> {
        vec!["heroes".to_string(), "villains".to_string()]
    }

    fn default_results_per_wiki() -> u32 {
        2
    }

    fn default_image_proxy() -> String {
        "https://wsrv.nl/?url=".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastPolicy {
    /// Billed members considered
    #[serde(default = "CastPolicy::default_limit")]
    pub limit: usize,
    /// Drop members without a portrait
    #[serde(default = "CastPolicy::default_skip_without_image")]
    pub skip_without_image: bool,
    /// Minimum spacing between cast lookups
    #[serde(default = "CastPolicy::default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl Default for CastPolicy {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            skip_without_image: Self::default_skip_without_image(),
            cooldown_ms: Self::default_cooldown_ms(),
        }
    }
}

impl CastPolicy {
    fn default_limit() -> usize {
        15
    }

    fn default_skip_without_image() -> bool {
        true
    }

    fn default_cooldown_ms() -> u64 {
        200
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}
