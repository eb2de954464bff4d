//! Normalized search and enrichment models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source-specific identifier of a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Int(i64),
    Text(String),
}

impl CandidateId {
    /// Parse a raw id, preferring the integer form
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => CandidateId::Int(id),
            Err(_) => CandidateId::Text(raw.to_string()),
        }
    }

    /// Integer value, also accepted from a numeric text id
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CandidateId::Int(id) => Some(*id),
            CandidateId::Text(text) => text.trim().parse().ok(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, CandidateId::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Int(id) => write!(f, "{}", id),
            CandidateId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(id: i64) -> Self {
        CandidateId::Int(id)
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        CandidateId::Text(id)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        CandidateId::Text(id.to_string())
    }
}

/// Kind of a candidate, carrying the fields only that kind can have
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CandidateKind {
    /// Anime/manga character
    Character,
    GameCharacter,
    WikiCharacter {
        /// Work inferred from the page's categories
        #[serde(rename = "sourceTitle")]
        source_title: Option<String>,
        /// Wiki subdomain the page came from
        wiki: String,
    },
    Actor,
    Movie {
        year: Option<i32>,
    },
    Tv {
        year: Option<i32>,
    },
    Book,
    Manga,
    /// Game title from the game catalog
    Game,
}

impl CandidateKind {
    /// Wire tag of this kind
    pub fn tag(&self) -> &'static str {
        match self {
            CandidateKind::Character => "character",
            CandidateKind::GameCharacter => "game_character",
            CandidateKind::WikiCharacter { .. } => "wiki_character",
            CandidateKind::Actor => "actor",
            CandidateKind::Movie { .. } => "movie",
            CandidateKind::Tv { .. } => "tv",
            CandidateKind::Book => "book",
            CandidateKind::Manga => "manga",
            CandidateKind::Game => "game",
        }
    }

    /// Human-readable label shown next to a result
    pub fn label(&self) -> &'static str {
        match self {
            CandidateKind::Character => "Animanga",
            CandidateKind::GameCharacter => "Game",
            CandidateKind::WikiCharacter { .. } => "TV/Movie",
            CandidateKind::Actor => "Actor",
            CandidateKind::Movie { .. } => "Movie",
            CandidateKind::Tv { .. } => "TV Show",
            CandidateKind::Book => "Book",
            CandidateKind::Manga => "Manga",
            CandidateKind::Game => "Game",
        }
    }

    pub fn source_title(&self) -> Option<&str> {
        match self {
            CandidateKind::WikiCharacter { source_title, .. } => source_title.as_deref(),
            _ => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            CandidateKind::Movie { year } | CandidateKind::Tv { year } => *year,
            _ => None,
        }
    }

    /// Whether the candidate names a character rather than a work or person
    pub fn is_character(&self) -> bool {
        matches!(
            self,
            CandidateKind::Character
                | CandidateKind::GameCharacter
                | CandidateKind::WikiCharacter { .. }
        )
    }
}

/// Normalized search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidate {
    id: CandidateId,
    title: String,
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(flatten)]
    kind: CandidateKind,
}

impl SearchCandidate {
    /// Create a candidate, or `None` when the id or title is blank
    pub fn new(
        id: impl Into<CandidateId>,
        title: impl Into<String>,
        kind: CandidateKind,
    ) -> Option<Self> {
        let id = id.into();
        let title = title.into().trim().to_string();
        if title.is_empty() || id.is_blank() {
            return None;
        }
        Some(Self {
            id,
            title,
            image: None,
            description: None,
            kind,
        })
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = non_empty(image);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_empty(description);
        self
    }

    pub fn id(&self) -> &CandidateId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &CandidateKind {
        &self.kind
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Adapter identity.
///
/// Declaration order is the aggregation precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Jikan,
    Igdb,
    TmdbMedia,
    TmdbPerson,
    Fandom,
    Rawg,
    OpenLibrary,
}

impl Source {
    pub const ALL: [Source; 7] = [
        Source::Jikan,
        Source::Igdb,
        Source::TmdbMedia,
        Source::TmdbPerson,
        Source::Fandom,
        Source::Rawg,
        Source::OpenLibrary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Jikan => "jikan",
            Source::Igdb => "igdb",
            Source::TmdbMedia => "tmdb",
            Source::TmdbPerson => "tmdb_person",
            Source::Fandom => "fandom",
            Source::Rawg => "rawg",
            Source::OpenLibrary => "openlibrary",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of the work a list item comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    Anime,
    Manga,
    Game,
    #[serde(rename = "TV Show")]
    TvShow,
    Movie,
    Book,
    Other,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Anime => "Anime",
            SourceType::Manga => "Manga",
            SourceType::Game => "Game",
            SourceType::TvShow => "TV Show",
            SourceType::Movie => "Movie",
            SourceType::Book => "Book",
            SourceType::Other => "Other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an upstream type string onto a [`SourceType`]; unknown values become `Other`
pub fn normalize_source_type(raw: &str) -> SourceType {
    match raw.trim().to_lowercase().as_str() {
        "tv" | "tv show" => SourceType::TvShow,
        "movie" => SourceType::Movie,
        "game" => SourceType::Game,
        "book" => SourceType::Book,
        "anime" | "character" => SourceType::Anime,
        "manga" => SourceType::Manga,
        _ => SourceType::Other,
    }
}

/// Parent work of a character, as resolved from a detail lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAttribution {
    /// `None` when nothing was found; the user has to type it in
    pub source_title: Option<String>,
    pub source_type: SourceType,
}

impl SourceAttribution {
    pub fn new(source_title: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            source_title: non_empty(Some(source_title.into())),
            source_type,
        }
    }

    pub fn unknown(source_type: SourceType) -> Self {
        Self {
            source_title: None,
            source_type,
        }
    }
}

/// One cast member of a movie or TV show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastEntry {
    pub character_name: String,
    pub actor_name: String,
    pub image: Option<String>,
}

/// Result of enriching a selected candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Enrichment {
    Source(SourceAttribution),
    Cast(Vec<CastEntry>),
}

/// Candidate kinds with a source-attribution resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Character,
    GameCharacter,
}

impl FromStr for DetailKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "character" => Ok(DetailKind::Character),
            "game_character" => Ok(DetailKind::GameCharacter),
            other => Err(format!("no detail resolver for type '{}'", other)),
        }
    }
}

/// Parse the leading four-digit year of a `YYYY-MM-DD` date
pub(crate) fn parse_year(date: Option<&str>) -> Option<i32> {
    date.and_then(|d| d.get(0..4)).and_then(|y| y.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_rejects_blank_fields() {
        assert!(SearchCandidate::new(1, "  ", CandidateKind::Character).is_none());
        assert!(SearchCandidate::new("", "Frodo", CandidateKind::Book).is_none());
        let candidate = SearchCandidate::new(7, " Frodo ", CandidateKind::Book).unwrap();
        assert_eq!(candidate.title(), "Frodo");
    }

    #[test]
    fn test_empty_optionals_become_none() {
        let candidate = SearchCandidate::new(1, "Ryuk", CandidateKind::Character)
            .unwrap()
            .with_image(Some(String::new()))
            .with_description(Some("  ".to_string()));
        assert_eq!(candidate.image(), None);
        assert_eq!(candidate.description(), None);
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = SearchCandidate::new(
            5021,
            "Walter White",
            CandidateKind::WikiCharacter {
                source_title: Some("Breaking Bad".to_string()),
                wiki: "villains".to_string(),
            },
        )
        .unwrap()
        .with_image(Some("https://wsrv.nl/?url=x".to_string()));

        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 5021,
                "title": "Walter White",
                "image": "https://wsrv.nl/?url=x",
                "type": "wiki_character",
                "sourceTitle": "Breaking Bad",
                "wiki": "villains"
            })
        );

        let movie = SearchCandidate::new("tt1", "El Camino", CandidateKind::Movie { year: Some(2019) }).unwrap();
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["type"], "movie");
        assert_eq!(value["year"], 2019);
        assert!(value["image"].is_null());
    }

    #[test]
    fn test_candidate_id_parse() {
        assert_eq!(CandidateId::parse("42"), CandidateId::Int(42));
        assert_eq!(
            CandidateId::parse("/works/OL1W"),
            CandidateId::Text("/works/OL1W".to_string())
        );
        assert_eq!(CandidateId::Text(" 17 ".to_string()).as_int(), Some(17));
        assert_eq!(CandidateId::from("abc").as_int(), None);
    }

    #[test]
    fn test_source_precedence_order() {
        let mut shuffled = vec![Source::OpenLibrary, Source::Fandom, Source::Jikan, Source::TmdbPerson];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Source::Jikan, Source::TmdbPerson, Source::Fandom, Source::OpenLibrary]
        );
    }

    #[test]
    fn test_normalize_source_type() {
        assert_eq!(normalize_source_type("tv"), SourceType::TvShow);
        assert_eq!(normalize_source_type("Movie"), SourceType::Movie);
        assert_eq!(normalize_source_type("character"), SourceType::Anime);
        assert_eq!(normalize_source_type("actor"), SourceType::Other);
        assert_eq!(normalize_source_type(""), SourceType::Other);
    }

    #[test]
    fn test_detail_kind_parse() {
        assert_eq!("character".parse::<DetailKind>().unwrap(), DetailKind::Character);
        assert_eq!("game_character".parse::<DetailKind>().unwrap(), DetailKind::GameCharacter);
        assert!("movie".parse::<DetailKind>().is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(Some("2008-01-20")), Some(2008));
        assert_eq!(parse_year(Some("")), None);
        assert_eq!(parse_year(None), None);
    }
}
