//! Error types for adapters, resolvers and catalog construction

use crate::config::ConfigError;
use crate::Source;

/// Failure of a single upstream call.
///
/// Never escapes an adapter or resolver; see [`crate::SourceAdapter::search`].
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("{0} is not configured")]
    NotConfigured(Source),

    #[error("No credential available for {0}")]
    NoCredential(Source),

    #[error("Invalid id for {origin}: {id}")]
    InvalidId { origin: Source, id: String },

    #[error("{0} is cooling down")]
    CoolingDown(Source),

    #[error("Jikan error: {0}")]
    Jikan(#[from] jikan::JikanError),

    #[error("IGDB error: {0}")]
    Igdb(#[from] igdb::IgdbError),

    #[error("TMDB error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),

    #[error("Fandom error: {0}")]
    Fandom(#[from] fandom::FandomError),

    #[error("RAWG error: {0}")]
    Rawg(#[from] rawg::RawgError),

    #[error("Open Library error: {0}")]
    OpenLibrary(#[from] openlibrary::OpenLibraryError),
}

/// Errors raised while assembling a [`crate::Catalog`]
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid fandom category rules: {0}")]
    Pattern(#[from] fandom::FandomError),
}
