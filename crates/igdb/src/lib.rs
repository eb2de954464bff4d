//! IGDB v4 client with Twitch client-credentials authentication
//!
//! IGDB requests carry a bearer token issued by Twitch. [`TokenCache`] keeps
//! the current token and refreshes it through a [`TokenExchange`] once it is
//! absent or expired.

mod auth;
mod characters;
mod client;
mod error;
pub mod models;
mod token;

pub use auth::{TwitchAuth, TwitchCredentials};
pub use client::IgdbClient;
pub use error::IgdbError;
pub use models::{Character, GameRef, IssuedToken, MugShot};
pub use token::{Clock, Credential, SystemClock, TokenCache, TokenExchange};

pub type Result<T> = std::result::Result<T, IgdbError>;
