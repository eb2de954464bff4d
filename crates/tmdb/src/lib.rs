mod client;
mod credits;
mod error;
pub mod models;
mod search;

pub use client::{image_url, ApiKey, TmdbClient, POSTER_SIZE, PROFILE_SIZE};
pub use error::TmdbError;
pub use models::{CastMember, Credits, MediaType, MultiResult, PaginatedResponse, Person};

pub type Result<T> = std::result::Result<T, TmdbError>;
