//! Anime character adapter (Jikan)

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jikan::{Character, JikanClient};

use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

pub struct JikanAdapter {
    client: Arc<JikanClient>,
    limit: u32,
    /// Wait before each request; Jikan throttles bursts
    delay: Duration,
}

impl JikanAdapter {
    pub fn new(client: Arc<JikanClient>, limit: u32, delay: Duration) -> Self {
        Self {
            client,
            limit,
            delay,
        }
    }
}

#[async_trait]
impl SourceAdapter for JikanAdapter {
    fn source(&self) -> Source {
        Source::Jikan
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let response = self.client.search_characters(query, self.limit).await?;
        Ok(map_characters(response.data))
    }
}

pub(crate) fn map_characters(characters: Vec<Character>) -> Vec<SearchCandidate> {
    characters
        .into_iter()
        .filter_map(|character| {
            let image = character.image_url().map(str::to_string);
            SearchCandidate::new(character.mal_id, character.name, CandidateKind::Character)
                .map(|candidate| candidate.with_image(image))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jikan::CharacterSearchResponse;

    #[test]
    fn test_map_characters() {
        let json = r#"{"data": [
            {"mal_id": 80, "name": "Light Yagami", "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/80.jpg"}}},
            {"mal_id": 81, "name": "", "images": {"jpg": {"image_url": null}}},
            {"mal_id": 71, "name": "L Lawliet"}
        ]}"#;
        let response: CharacterSearchResponse = serde_json::from_str(json).unwrap();
        let candidates = map_characters(response.data);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title(), "Light Yagami");
        assert_eq!(candidates[0].kind(), &CandidateKind::Character);
        assert_eq!(candidates[0].image(), Some("https://cdn.myanimelist.net/80.jpg"));
        assert_eq!(candidates[0].description(), None);
        assert_eq!(candidates[1].title(), "L Lawliet");
        assert_eq!(candidates[1].image(), None);
    }
}
