use crate::{
    models::{MultiResult, PaginatedResponse, Person},
    TmdbClient,
};

impl TmdbClient {
    /// Search movies, TV shows and people in a single request
    /// GET /search/multi?query={query}
    pub async fn search_multi(&self, query: &str) -> crate::Result<PaginatedResponse<MultiResult>> {
        let api_key = self.api_key()?;
        let response = self
            .client()
            .get(self.url("/search/multi"))
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("query", query),
                ("include_adult", "false"),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Search people
    /// GET /search/person?query={query}
    pub async fn search_person(&self, query: &str) -> crate::Result<PaginatedResponse<Person>> {
        let api_key = self.api_key()?;
        let response = self
            .client()
            .get(self.url("/search/person"))
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("query", query),
                ("include_adult", "false"),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
