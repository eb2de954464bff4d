use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Image size used for movie and TV posters
pub const POSTER_SIZE: &str = "w500";
/// Image size used for person portraits and cast thumbnails
pub const PROFILE_SIZE: &str = "w200";

/// Shared API key that can be updated at runtime.
pub type ApiKey = Arc<RwLock<String>>;

/// Build an absolute image URL from a TMDB file path (e.g. `/abc.jpg`).
pub fn image_url(size: &str, path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}

pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a shared reqwest Client.
    pub fn with_client(client: Client, api_key: ApiKey) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    /// Create a TmdbClient pointed at a different API root.
    pub fn with_base_url(client: Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            lang: "en-US".to_string(),
        }
    }

    /// Whether an API key has been configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.read().trim().is_empty()
    }

    /// Get the current API key
    pub(crate) fn api_key(&self) -> crate::Result<String> {
        let key = self.api_key.read().clone();
        if key.trim().is_empty() {
            return Err(TmdbError::MissingApiKey);
        }
        Ok(key)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url(PROFILE_SIZE, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w200/abc.jpg"
        );
    }

    #[test]
    fn test_missing_api_key() {
        let client = TmdbClient::with_client(Client::new(), Arc::new(RwLock::new("  ".into())));
        assert!(!client.has_api_key());
        assert!(matches!(client.api_key(), Err(TmdbError::MissingApiKey)));
    }
}
