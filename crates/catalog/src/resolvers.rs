//! Follow-up lookups for a selected candidate

mod cast;
mod character;
mod game_character;

pub use cast::CastResolver;
pub use character::CharacterDetailResolver;
pub use game_character::GameCharacterDetailResolver;
