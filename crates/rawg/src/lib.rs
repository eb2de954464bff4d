mod client;
mod error;
pub mod models;

pub use client::RawgClient;
pub use error::RawgError;
pub use models::{Game, GamesResponse};

pub type Result<T> = std::result::Result<T, RawgError>;
