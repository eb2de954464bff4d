//! Fully wired catalog built from a [`CatalogConfig`]

use std::sync::Arc;

use fandom::{CategoryInference, FandomClient};
use igdb::{IgdbClient, TokenCache, TwitchAuth, TwitchCredentials};
use jikan::JikanClient;
use openlibrary::OpenLibraryClient;
use parking_lot::RwLock;
use rawg::RawgClient;
use tmdb::{MediaType, TmdbClient};
use tokio::sync::mpsc;

use crate::adapters::{
    FandomAdapter, IgdbAdapter, JikanAdapter, OpenLibraryAdapter, RawgAdapter, TmdbMediaAdapter,
    TmdbPersonAdapter,
};
use crate::config::CatalogConfig;
use crate::resolvers::{CastResolver, CharacterDetailResolver, GameCharacterDetailResolver};
use crate::session::{QueryPolicy, SearchSession, SessionEvent};
use crate::{
    Aggregator, CandidateId, CandidateKind, CastEntry, CatalogError, DetailKind, Enrichment,
    SearchCandidate, SourceAdapter, SourceAttribution,
};

pub struct Catalog {
    aggregator: Arc<Aggregator>,
    characters: CharacterDetailResolver,
    game_characters: GameCharacterDetailResolver,
    cast: CastResolver,
    policy: QueryPolicy,
}

impl Catalog {
    /// Build every client, adapter and resolver over one shared HTTP client
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(config.http.user_agent.as_str())
            .timeout(config.http.timeout())
            .connect_timeout(config.http.connect_timeout())
            .build()?;
        let credentials = &config.credentials;
        let limit = config.search.per_source_limit;

        let jikan = Arc::new(JikanClient::new(http.clone()));
        let igdb = Arc::new(IgdbClient::new(http.clone(), credentials.twitch_client_id.clone()));
        let tokens = Arc::new(TokenCache::new(Arc::new(TwitchAuth::new(
            http.clone(),
            TwitchCredentials {
                client_id: credentials.twitch_client_id.clone(),
                client_secret: credentials.twitch_client_secret.clone(),
            },
        ))));
        let tmdb = Arc::new(TmdbClient::with_client(
            http.clone(),
            Arc::new(RwLock::new(credentials.tmdb_api_key.clone())),
        ));
        let fandom = Arc::new(FandomClient::new(http.clone()));
        let rawg = Arc::new(RawgClient::new(http.clone(), credentials.rawg_api_key.clone()));
        let openlibrary = Arc::new(OpenLibraryClient::new(http));

        let inference = CategoryInference::new(&config.fandom.categories)?;

        let adapters: Vec<Arc<dyn SourceAdapter>> = vec![
            Arc::new(JikanAdapter::new(jikan.clone(), limit, config.jikan.request_delay())),
            Arc::new(IgdbAdapter::new(igdb.clone(), tokens.clone(), limit)),
            Arc::new(TmdbMediaAdapter::new(tmdb.clone(), limit as usize)),
            Arc::new(TmdbPersonAdapter::new(tmdb.clone(), limit as usize)),
            Arc::new(FandomAdapter::new(
                fandom,
                config.fandom.wikis.clone(),
                config.fandom.results_per_wiki,
                inference,
                config.fandom.image_proxy.clone(),
            )),
            Arc::new(RawgAdapter::new(rawg, limit)),
            Arc::new(OpenLibraryAdapter::new(openlibrary, limit)),
        ];

        tracing::debug!("Catalog configured with {:?}", credentials);

        Ok(Self {
            aggregator: Arc::new(Aggregator::new(adapters)),
            characters: CharacterDetailResolver::new(jikan),
            game_characters: GameCharacterDetailResolver::new(igdb, tokens),
            cast: CastResolver::new(tmdb, config.cast.clone()),
            policy: config.search.query_policy(),
        })
    }

    pub fn aggregator(&self) -> Arc<Aggregator> {
        self.aggregator.clone()
    }

    pub fn query_policy(&self) -> QueryPolicy {
        self.policy
    }

    /// Ranked candidates from every source; empty for a too-short query
    pub async fn search(&self, query: &str) -> Vec<SearchCandidate> {
        let query = query.trim();
        if !self.policy.accepts(query) {
            tracing::debug!("Query '{}' is shorter than {} characters", query, self.policy.min_query_len);
            return Vec::new();
        }
        self.aggregator.search(query).await
    }

    /// Start a search-as-you-type session
    pub fn session(&self) -> (SearchSession, mpsc::UnboundedReceiver<SessionEvent>) {
        SearchSession::spawn(self.aggregator(), self.policy)
    }

    pub async fn detail(&self, kind: DetailKind, id: &CandidateId) -> SourceAttribution {
        match kind {
            DetailKind::Character => self.characters.resolve(id).await,
            DetailKind::GameCharacter => self.game_characters.resolve(id).await,
        }
    }

    pub async fn cast(&self, media: MediaType, id: &CandidateId) -> Vec<CastEntry> {
        self.cast.resolve(media, id).await
    }

    /// Run the follow-up lookup matching the candidate's kind, if it has one
    pub async fn enrich(&self, candidate: &SearchCandidate) -> Option<Enrichment> {
        let id = candidate.id();
        match candidate.kind() {
            CandidateKind::Character => Some(Enrichment::Source(
                self.detail(DetailKind::Character, id).await,
            )),
            CandidateKind::GameCharacter => Some(Enrichment::Source(
                self.detail(DetailKind::GameCharacter, id).await,
            )),
            CandidateKind::Movie { .. } => Some(Enrichment::Cast(self.cast(MediaType::Movie, id).await)),
            CandidateKind::Tv { .. } => Some(Enrichment::Cast(self.cast(MediaType::Tv, id).await)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Source, SourceType};

    fn catalog() -> Catalog {
        Catalog::from_config(&CatalogConfig::default()).unwrap()
    }

    #[test]
    fn test_from_config_registers_every_source() {
        assert_eq!(catalog().aggregator().sources(), Source::ALL);
    }

    #[test]
    fn test_role_words_are_escaped() {
        let mut config = CatalogConfig::default();
        // Escaped before compiling, so any text is a valid role word
        config.fandom.categories.role_words = vec!["(".to_string()];
        assert!(Catalog::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_short_query_skips_sources() {
        assert!(catalog().search(" ab ").await.is_empty());
    }

    #[tokio::test]
    async fn test_enrich_dispatches_by_kind() {
        let catalog = catalog();

        let actor = SearchCandidate::new(17419, "Bryan Cranston", CandidateKind::Actor).unwrap();
        assert_eq!(catalog.enrich(&actor).await, None);

        // An id the resolver cannot use falls back without a request
        let character = SearchCandidate::new("abc", "Guts", CandidateKind::Character).unwrap();
        assert_eq!(
            catalog.enrich(&character).await,
            Some(Enrichment::Source(SourceAttribution::unknown(SourceType::Anime)))
        );

        // No TMDB key configured
        let show = SearchCandidate::new(1396, "Breaking Bad", CandidateKind::Tv { year: Some(2008) }).unwrap();
        assert_eq!(catalog.enrich(&show).await, Some(Enrichment::Cast(Vec::new())));
    }
}
