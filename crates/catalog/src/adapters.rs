//! Source adapters for each external catalog

mod fandom_adapter;
mod igdb_adapter;
mod jikan_adapter;
mod openlibrary_adapter;
mod rawg_adapter;
mod tmdb_adapter;

pub use fandom_adapter::FandomAdapter;
pub use igdb_adapter::IgdbAdapter;
pub use jikan_adapter::JikanAdapter;
pub use openlibrary_adapter::OpenLibraryAdapter;
pub use rawg_adapter::RawgAdapter;
pub use tmdb_adapter::{TmdbMediaAdapter, TmdbPersonAdapter};
