//! Game catalog adapter (RAWG)

use std::sync::Arc;

use async_trait::async_trait;
use rawg::{Game, RawgClient};

use crate::{AdapterError, CandidateKind, SearchCandidate, Source, SourceAdapter};

/// Game titles from RAWG
pub struct RawgAdapter {
    client: Arc<RawgClient>,
    limit: u32,
}

impl RawgAdapter {
    pub fn new(client: Arc<RawgClient>, limit: u32) -> Self {
        Self { client, limit }
    }
}

#[async_trait]
impl SourceAdapter for RawgAdapter {
    fn source(&self) -> Source {
        Source::Rawg
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, AdapterError> {
        if !self.client.has_api_key() {
            return Err(AdapterError::NotConfigured(Source::Rawg));
        }
        let response = self.client.search_games(query, self.limit).await?;
        Ok(map_games(response.results))
    }
}

pub(crate) fn map_games(games: Vec<Game>) -> Vec<SearchCandidate> {
    games
        .into_iter()
        .filter_map(|game| {
            SearchCandidate::new(game.id, game.name, CandidateKind::Game)
                .map(|candidate| candidate.with_image(game.background_image))
        })
        .collect()
}
