use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSet {
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Images {
    pub jpg: Option<ImageSet>,
    pub webp: Option<ImageSet>,
}

/// Character item in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub mal_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub favorites: i64,
}

impl Character {
    /// JPG image URL, if the character has one
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .jpg
            .as_ref()
            .and_then(|set| set.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Response from GET /characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSearchResponse {
    #[serde(default)]
    pub data: Vec<Character>,
}

/// Reference to an anime or manga entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRef {
    pub mal_id: i64,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeRole {
    pub role: Option<String>,
    pub anime: Option<WorkRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaRole {
    pub role: Option<String>,
    pub manga: Option<WorkRef>,
}

/// Character with its associated works, from GET /characters/{id}/full
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFull {
    pub mal_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub anime: Vec<AnimeRole>,
    #[serde(default)]
    pub manga: Vec<MangaRole>,
}

impl CharacterFull {
    /// Title of the first listed anime
    pub fn first_anime_title(&self) -> Option<&str> {
        self.anime
            .first()
            .and_then(|role| role.anime.as_ref())
            .and_then(|work| work.title.as_deref())
            .filter(|title| !title.is_empty())
    }

    /// Title of the first listed manga
    pub fn first_manga_title(&self) -> Option<&str> {
        self.manga
            .first()
            .and_then(|role| role.manga.as_ref())
            .and_then(|work| work.title.as_deref())
            .filter(|title| !title.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CharacterFullResponse {
    pub data: CharacterFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_image_url() {
        let json = r#"{"data": [
            {"mal_id": 40, "name": "Light Yagami", "images": {"jpg": {"image_url": "https://cdn.myanimelist.net/l.jpg"}}},
            {"mal_id": 41, "name": "Ryuk", "images": {"jpg": {"image_url": null}}},
            {"mal_id": 42, "name": "Misa"}
        ]}"#;
        let response: CharacterSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data[0].image_url(),
            Some("https://cdn.myanimelist.net/l.jpg")
        );
        assert_eq!(response.data[1].image_url(), None);
        assert_eq!(response.data[2].image_url(), None);
    }

    #[test]
    fn test_first_titles() {
        let json = r#"{
            "mal_id": 417,
            "name": "Lelouch Lamperouge",
            "anime": [{"role": "Main", "anime": {"mal_id": 1575, "title": "Code Geass"}}],
            "manga": [{"role": "Main", "manga": {"mal_id": 1, "title": "Code Geass: Nightmare"}}]
        }"#;
        let full: CharacterFull = serde_json::from_str(json).unwrap();
        assert_eq!(full.first_anime_title(), Some("Code Geass"));
        assert_eq!(full.first_manga_title(), Some("Code Geass: Nightmare"));

        let manga_only: CharacterFull = serde_json::from_str(
            r#"{"mal_id": 1, "name": "X", "manga": [{"manga": {"mal_id": 2, "title": "Berserk"}}]}"#,
        )
        .unwrap();
        assert_eq!(manga_only.first_anime_title(), None);
        assert_eq!(manga_only.first_manga_title(), Some("Berserk"));
    }
}
