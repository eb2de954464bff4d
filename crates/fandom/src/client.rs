use reqwest::Client;

use crate::error::FandomError;
use crate::models::{Page, PagesResponse, SearchResponse};

/// `{wiki}` is replaced by the wiki subdomain
const URL_TEMPLATE: &str = "https://{wiki}.fandom.com/api.php";

pub struct FandomClient {
    client: Client,
    url_template: String,
}

impl FandomClient {
    pub fn new(client: Client) -> Self {
        Self::with_url_template(client, URL_TEMPLATE)
    }

    pub fn with_url_template(client: Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    pub(crate) fn api_url(&self, wiki: &str) -> String {
        self.url_template.replace("{wiki}", wiki)
    }

    /// Full-text search, returning matching page ids in rank order
    /// GET /api.php?action=query&list=search
    pub async fn search(&self, wiki: &str, query: &str, limit: u32) -> crate::Result<Vec<i64>> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.api_url(wiki))
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;
        let body: SearchResponse = self.handle_response(response).await?;
        Ok(body
            .query
            .map(|list| list.search.into_iter().map(|hit| hit.pageid).collect())
            .unwrap_or_default())
    }

    /// Fetch thumbnail, intro extract and categories for pages, in ascending id order
    /// GET /api.php?action=query&pageids=...
    pub async fn pages(&self, wiki: &str, page_ids: &[i64]) -> crate::Result<Vec<Page>> {
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = page_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("|");
        let response = self
            .client
            .get(self.api_url(wiki))
            .query(&[
                ("action", "query"),
                ("pageids", ids.as_str()),
                ("prop", "pageimages|extracts|categories"),
                ("pithumbsize", "600"),
                ("exchars", "200"),
                ("exintro", "true"),
                ("explaintext", "true"),
                ("cllimit", "20"),
                ("format", "json"),
            ])
            .send()
            .await?;
        let body: PagesResponse = self.handle_response(response).await?;
        Ok(body
            .query
            .map(|map| map.pages.into_values().collect())
            .unwrap_or_default())
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FandomError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| FandomError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
