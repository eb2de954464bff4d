//! Client for the Open Library search API

mod client;
mod error;
pub mod models;

pub use client::OpenLibraryClient;
pub use error::OpenLibraryError;
pub use models::{BookDoc, SearchResponse};

pub type Result<T> = std::result::Result<T, OpenLibraryError>;
