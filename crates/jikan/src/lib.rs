//! Client for the Jikan v4 API (unofficial MyAnimeList)

mod characters;
mod client;
mod error;
pub mod models;

pub use client::JikanClient;
pub use error::JikanError;
pub use models::{Character, CharacterFull, CharacterSearchResponse};

pub type Result<T> = std::result::Result<T, JikanError>;
