use std::sync::Arc;

use igdb::{Character, IgdbClient, TokenCache};

use crate::{AdapterError, CandidateId, Source, SourceAttribution, SourceType};

/// Resolves the game a game character appears in
pub struct GameCharacterDetailResolver {
    client: Arc<IgdbClient>,
    tokens: Arc<TokenCache>,
}

impl GameCharacterDetailResolver {
    pub fn new(client: Arc<IgdbClient>, tokens: Arc<TokenCache>) -> Self {
        Self { client, tokens }
    }

    pub async fn resolve(&self, id: &CandidateId) -> SourceAttribution {
        match self.try_resolve(id).await {
            Ok(attribution) => attribution,
            Err(e) => {
                tracing::warn!("Game character detail lookup failed for {}: {}", id, e);
                SourceAttribution::unknown(SourceType::Game)
            }
        }
    }

    async fn try_resolve(&self, id: &CandidateId) -> Result<SourceAttribution, AdapterError> {
        let igdb_id = id.as_int().ok_or_else(|| AdapterError::InvalidId {
            origin: Source::Igdb,
            id: id.to_string(),
        })?;
        let token = self
            .tokens
            .get_token()
            .await
            .ok_or(AdapterError::NoCredential(Source::Igdb))?;
        let character = self
            .client
            .get_character_games(&token, igdb_id)
            .await
            .inspect_err(|e| {
                self.tokens.invalidate_on_unauthorized(e);
            })?;
        Ok(attribution_from_games(character.as_ref()))
    }
}

pub(crate) fn attribution_from_games(character: Option<&Character>) -> SourceAttribution {
    match character.and_then(Character::first_game_name) {
        Some(name) => SourceAttribution::new(name, SourceType::Game),
        None => SourceAttribution::unknown(SourceType::Game),
    }
}
