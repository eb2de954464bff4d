//! Video game character adapter (IGDB)

use std::sync::Arc;

use async_trait::async_trait;
use igdb::{Character, IgdbClient, TokenCache};

use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

pub struct IgdbAdapter {
    client: Arc<IgdbClient>,
    tokens: Arc<TokenCache>,
    limit: u32,
}

impl IgdbAdapter {
    pub fn new(client: Arc<IgdbClient>, tokens: Arc<TokenCache>, limit: u32) -> Self {
        Self {
            client,
            tokens,
            limit,
        }
    }
}

#[async_trait]
impl SourceAdapter for IgdbAdapter {
    fn source(&self) -> Source {
        Source::Igdb
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        let token = self
            .tokens
            .get_token()
            .await
            .ok_or(AdapterError::NoCredential(Source::Igdb))?;
        let characters = self
            .client
            .search_characters(&token, query, self.limit)
            .await
            .inspect_err(|e| {
                self.tokens.invalidate_on_unauthorized(e);
            })?;
        Ok(map_characters(characters))
    }
}

pub(crate) fn map_characters(characters: Vec<Character>) -> Vec<SearchCandidate> {
    characters
        .into_iter()
        .filter_map(|character| {
            let image = character.mug_shot_id().map(IgdbClient::image_url);
            SearchCandidate::new(character.id, character.name, CandidateKind::GameCharacter)
                .map(|candidate| candidate.with_image(image))
        })
        .collect()
}
