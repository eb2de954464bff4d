//! Client for fandom.com MediaWiki instances
//!
//! Besides search and page lookups, [`CategoryInference`] guesses the work a
//! character belongs to from the page's category tags.

mod category;
mod client;
mod error;
pub mod models;

pub use category::{CategoryInference, CategoryRules};
pub use client::FandomClient;
pub use error::FandomError;
pub use models::{Category, Page};

pub type Result<T> = std::result::Result<T, FandomError>;
