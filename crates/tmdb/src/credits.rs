use crate::{
    models::{Credits, MediaType},
    TmdbClient,
};

impl TmdbClient {
    /// Get the cast and crew of a movie or TV show
    /// GET /{movie|tv}/{id}/credits
    pub async fn get_credits(&self, media_type: MediaType, id: i64) -> crate::Result<Credits> {
        let api_key = self.api_key()?;
        let url = self.url(&format!("/{}/{}/credits", media_type.as_str(), id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", api_key.as_str()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
