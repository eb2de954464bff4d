//! Prefill for a new list item built from a selected candidate

use serde::Serialize;
use thiserror::Error;

use crate::{normalize_source_type, CandidateKind, CastEntry, Enrichment, SearchCandidate, SourceType};

pub const DEFAULT_RATING: u8 = 5;
pub const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Character name required")]
    MissingCharacterName,
    #[error("Source title required")]
    MissingSourceTitle,
    #[error("Rating must be between 1 and 10, got {0}")]
    RatingOutOfRange(u8),
}

/// Editable list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub character_name: String,
    pub source_title: String,
    pub source_type: SourceType,
    pub image: Option<String>,
    pub rating: u8,
}

impl ItemDraft {
    /// Fill the form from a candidate and whatever its resolver returned.
    ///
    /// Character kinds name the character after the candidate. Works and
    /// people leave the name blank and become the source themselves.
    pub fn prefill(candidate: &SearchCandidate, enrichment: Option<&Enrichment>) -> Self {
        let attribution = match enrichment {
            Some(Enrichment::Source(attribution)) => Some(attribution),
            _ => None,
        };
        let resolved_title = || {
            attribution
                .and_then(|a| a.source_title.clone())
                .unwrap_or_default()
        };

        let (character_name, source_title, source_type) = match candidate.kind() {
            CandidateKind::Character => (
                candidate.title().to_string(),
                resolved_title(),
                attribution.map_or(SourceType::Anime, |a| a.source_type),
            ),
            CandidateKind::GameCharacter => (candidate.title().to_string(), resolved_title(), SourceType::Game),
            CandidateKind::WikiCharacter { source_title, .. } => (
                candidate.title().to_string(),
                source_title.clone().unwrap_or_default(),
                SourceType::TvShow,
            ),
            kind => (
                String::new(),
                candidate.title().to_string(),
                normalize_source_type(kind.tag()),
            ),
        };

        Self {
            character_name,
            source_title,
            source_type,
            image: candidate.image().map(str::to_string),
            rating: DEFAULT_RATING,
        }
    }

    /// Take the character and portrait of a cast member
    pub fn choose_cast(&mut self, entry: &CastEntry) {
        self.character_name = entry.character_name.clone();
        if let Some(image) = &entry.image {
            self.image = Some(image.clone());
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.character_name.trim().is_empty() {
            return Err(DraftError::MissingCharacterName);
        }
        if self.source_title.trim().is_empty() {
            return Err(DraftError::MissingSourceTitle);
        }
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err(DraftError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceAttribution;

    fn candidate(kind: CandidateKind, title: &str) -> SearchCandidate {
        SearchCandidate::new(1, title, kind)
            .unwrap()
            .with_image(Some("https://img/x.jpg".to_string()))
    }

    #[test]
    fn test_anime_character_uses_attribution() {
        let enrichment = Enrichment::Source(SourceAttribution::new("Berserk", SourceType::Manga));
        let draft = ItemDraft::prefill(&candidate(CandidateKind::Character, "Guts"), Some(&enrichment));

        assert_eq!(draft.character_name, "Guts");
        assert_eq!(draft.source_title, "Berserk");
        assert_eq!(draft.source_type, SourceType::Manga);
        assert_eq!(draft.image.as_deref(), Some("https://img/x.jpg"));
        assert_eq!(draft.rating, DEFAULT_RATING);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_unresolved_character_needs_a_source() {
        let draft = ItemDraft::prefill(&candidate(CandidateKind::Character, "Guts"), None);
        assert_eq!(draft.source_type, SourceType::Anime);
        assert_eq!(draft.source_title, "");
        assert_eq!(draft.validate(), Err(DraftError::MissingSourceTitle));
    }

    #[test]
    fn test_game_character_is_always_game() {
        let enrichment = Enrichment::Source(SourceAttribution::new("The Witcher 3", SourceType::Game));
        let draft = ItemDraft::prefill(&candidate(CandidateKind::GameCharacter, "Geralt"), Some(&enrichment));
        assert_eq!(draft.source_type, SourceType::Game);
        assert_eq!(draft.source_title, "The Witcher 3");
    }

    #[test]
    fn test_wiki_character_uses_inferred_source() {
        let kind = CandidateKind::WikiCharacter {
            source_title: Some("Breaking Bad".to_string()),
            wiki: "villains".to_string(),
        };
        let draft = ItemDraft::prefill(&candidate(kind, "Walter White"), None);
        assert_eq!(draft.character_name, "Walter White");
        assert_eq!(draft.source_title, "Breaking Bad");
        assert_eq!(draft.source_type, SourceType::TvShow);
    }

    #[test]
    fn test_work_becomes_the_source() {
        let draft = ItemDraft::prefill(&candidate(CandidateKind::Tv { year: Some(2008) }, "Breaking Bad"), None);
        assert_eq!(draft.character_name, "");
        assert_eq!(draft.source_title, "Breaking Bad");
        assert_eq!(draft.source_type, SourceType::TvShow);
        assert_eq!(draft.validate(), Err(DraftError::MissingCharacterName));

        let actor = ItemDraft::prefill(&candidate(CandidateKind::Actor, "Bryan Cranston"), None);
        assert_eq!(actor.source_type, SourceType::Other);
        let game = ItemDraft::prefill(&candidate(CandidateKind::Game, "Portal 2"), None);
        assert_eq!(game.source_type, SourceType::Game);
    }

    #[test]
    fn test_choose_cast() {
        let mut draft = ItemDraft::prefill(&candidate(CandidateKind::Tv { year: None }, "Breaking Bad"), None);
        draft.choose_cast(&CastEntry {
            character_name: "Jesse Pinkman".to_string(),
            actor_name: "Aaron Paul".to_string(),
            image: Some("https://image.tmdb.org/t/p/w200/ap.jpg".to_string()),
        });
        assert_eq!(draft.character_name, "Jesse Pinkman");
        assert_eq!(draft.image.as_deref(), Some("https://image.tmdb.org/t/p/w200/ap.jpg"));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_rating_bounds() {
        let mut draft = ItemDraft::prefill(&candidate(CandidateKind::GameCharacter, "Geralt"), None);
        draft.source_title = "The Witcher".to_string();
        draft.rating = 0;
        assert_eq!(draft.validate(), Err(DraftError::RatingOutOfRange(0)));
        draft.rating = 11;
        assert_eq!(draft.validate(), Err(DraftError::RatingOutOfRange(11)));
        draft.rating = 10;
        assert_eq!(draft.validate(), Ok(()));
    }
}
