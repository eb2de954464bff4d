//! Multi-source character search
//!
//! Fans a query out to every configured catalog, normalizes the results into
//! [`SearchCandidate`]s and ranks them by title relevance. A selected
//! candidate can then be enriched with the work it comes from or with the
//! cast of a movie or show.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │          Aggregator          │
//!                │ search(query) -> ranked Vec  │
//!                └──────────────────────────────┘
//!                               │ join_all
//!      ┌──────────┬──────────┬──┴───────┬──────────┬──────────┐
//!      ▼          ▼          ▼          ▼          ▼          ▼
//!   Jikan       IGDB       TMDB       Fandom     RAWG    OpenLibrary
//!              (token     (media +
//!               cache)     person)
//!
//!   CharacterDetailResolver / GameCharacterDetailResolver -> SourceAttribution
//!   CastResolver                                          -> Vec<CastEntry>
//!
//!   ItemDraft::prefill -> CharacterList::add -> ranked_view / share
//! ```
//!
//! # Example
//!
//! ```ignore
//! use catalog::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::from_config(&CatalogConfig::default())?;
//! let candidates = catalog.search("Walter White").await;
//! ```

mod adapter;
pub mod adapters;
mod aggregator;
pub mod config;
mod cooldown;
mod draft;
mod error;
mod list;
mod models;
mod ranker;
pub mod resolvers;
mod service;
mod session;

pub use adapter::SourceAdapter;
pub use aggregator::Aggregator;
pub use config::{CatalogConfig, ConfigError};
pub use cooldown::Cooldown;
pub use draft::{DraftError, ItemDraft};
pub use error::{AdapterError, CatalogError};
pub use list::{CharacterList, ListError, ListItem, RankedItem, SharedList, UNKNOWN_AUTHOR};
pub use models::{
    normalize_source_type, CandidateId, CandidateKind, CastEntry, DetailKind, Enrichment,
    SearchCandidate, Source, SourceAttribution, SourceType,
};
pub use ranker::{match_tier, rank, MatchTier};
pub use service::Catalog;
pub use session::{QueryPolicy, SearchSession, SessionEvent};
pub use tmdb::MediaType;
