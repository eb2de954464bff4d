use reqwest::Client;

use crate::error::OpenLibraryError;
use crate::models::SearchResponse;

const BASE_URL: &str = "https://openlibrary.org";
const SEARCH_FIELDS: &str = "key,title,author_name,cover_i,first_publish_year";

pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search works
    /// GET /search.json?q={query}&limit={limit}
    pub async fn search_books(&self, query: &str, limit: u32) -> crate::Result<SearchResponse> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("fields", SEARCH_FIELDS),
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
            return Err(OpenLibraryError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| OpenLibraryError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
