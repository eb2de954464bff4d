use crate::client::JikanClient;
use crate::models::{CharacterFull, CharacterFullResponse, CharacterSearchResponse};

impl JikanClient {
    /// Search characters by name
    /// GET /characters?q={query}&limit={limit}
    pub async fn search_characters(
        &self,
        query: &str,
        limit: u32,
    ) -> crate::Result<CharacterSearchResponse> {
        let limit = limit.to_string();
        let response = self
            .client()
            .get(self.url("/characters"))
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a character together with the works it appears in
    /// GET /characters/{id}/full
    pub async fn get_character_full(&self, id: i64) -> crate::Result<CharacterFull> {
        let response = self
            .client()
            .get(self.url(&format!("/characters/{}/full", id)))
            .send()
            .await?;
        let body: CharacterFullResponse = self.handle_response(response).await?;
        Ok(body.data)
    }
}
