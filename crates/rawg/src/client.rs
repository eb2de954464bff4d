use reqwest::Client;

use crate::error::RawgError;
use crate::models::GamesResponse;

const BASE_URL: &str = "https://api.rawg.io/api";

pub struct RawgClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RawgClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Search games by title
    /// GET /games?search={query}&page_size={limit}
    pub async fn search_games(&self, query: &str, limit: u32) -> crate::Result<GamesResponse> {
        if !self.has_api_key() {
            return Err(RawgError::MissingApiKey);
        }

        let page_size = limit.to_string();
        let response = self
            .client
            .get(format!("{}/games", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("search", query),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RawgError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| RawgError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
