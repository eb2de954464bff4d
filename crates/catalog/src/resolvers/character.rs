use std::sync::Arc;

use jikan::{CharacterFull, JikanClient};

use crate::{AdapterError, CandidateId, Source, SourceAttribution, SourceType};

/// Resolves the anime or manga an anime character comes from
pub struct CharacterDetailResolver {
    client: Arc<JikanClient>,
}

impl CharacterDetailResolver {
    pub fn new(client: Arc<JikanClient>) -> Self {
        Self { client }
    }

    /// Parent work of the character; an unknown Anime title on any failure
    pub async fn resolve(&self, id: &CandidateId) -> SourceAttribution {
        match self.try_resolve(id).await {
            Ok(attribution) => attribution,
            Err(e) => {
                tracing::warn!("Character detail lookup failed for {}: {}", id, e);
                SourceAttribution::unknown(SourceType::Anime)
            }
        }
    }

    async fn try_resolve(&self, id: &CandidateId) -> Result<SourceAttribution, AdapterError> {
        let mal_id = id.as_int().ok_or_else(|| AdapterError::InvalidId {
            origin: Source::Jikan,
            id: id.to_string(),
        })?;
        let character = self.client.get_character_full(mal_id).await?;
        Ok(attribution_from_character(&character))
    }
}

/// First anime wins, then first manga
pub(crate) fn attribution_from_character(character: &CharacterFull) -> SourceAttribution {
    if let Some(title) = character.first_anime_title() {
        SourceAttribution::new(title, SourceType::Anime)
    } else if let Some(title) = character.first_manga_title() {
        SourceAttribution::new(title, SourceType::Manga)
    } else {
        SourceAttribution::unknown(SourceType::Anime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(json: &str) -> CharacterFull {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_anime_takes_precedence() {
        let full = character(
            r#"{"mal_id": 417, "name": "Lelouch",
                "anime": [{"anime": {"mal_id": 1575, "title": "Code Geass"}}],
                "manga": [{"manga": {"mal_id": 1, "title": "Code Geass: Nightmare"}}]}"#,
        );
        assert_eq!(
            attribution_from_character(&full),
            SourceAttribution::new("Code Geass", SourceType::Anime)
        );
    }

    #[test]
    fn test_falls_back_to_manga() {
        let full = character(
            r#"{"mal_id": 422, "name": "Guts", "anime": [],
                "manga": [{"manga": {"mal_id": 2, "title": "Berserk"}}]}"#,
        );
        let attribution = attribution_from_character(&full);
        assert_eq!(attribution.source_title.as_deref(), Some("Berserk"));
        assert_eq!(attribution.source_type, SourceType::Manga);
    }

    #[test]
    fn test_no_works_is_unknown_anime() {
        let full = character(r#"{"mal_id": 1, "name": "Nobody"}"#);
        assert_eq!(
            attribution_from_character(&full),
            SourceAttribution::unknown(SourceType::Anime)
        );
    }

    #[tokio::test]
    async fn test_text_id_falls_back_without_request() {
        let resolver = CharacterDetailResolver::new(Arc::new(JikanClient::new(reqwest::Client::new())));
        let attribution = resolver.resolve(&CandidateId::from("not-a-number")).await;
        assert_eq!(attribution, SourceAttribution::unknown(SourceType::Anime));
    }
}
