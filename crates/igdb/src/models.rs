use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MugShot {
    pub id: Option<i64>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRef {
    pub id: i64,
    pub name: Option<String>,
}

/// Character entry from POST /characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub mug_shot: Option<MugShot>,
    #[serde(default)]
    pub games: Vec<GameRef>,
}

impl Character {
    /// Image id of the character's mug shot
    pub fn mug_shot_id(&self) -> Option<&str> {
        self.mug_shot
            .as_ref()
            .and_then(|shot| shot.image_id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Name of the first game the character appears in
    pub fn first_game_name(&self) -> Option<&str> {
        self.games
            .first()
            .and_then(|game| game.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Response from the Twitch OAuth token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_accessors() {
        let json = r#"[
            {"id": 1, "name": "Geralt of Rivia", "mug_shot": {"id": 9, "image_id": "co1abc"}, "games": [{"id": 1942, "name": "The Witcher 3: Wild Hunt"}]},
            {"id": 2, "name": "Nameless"}
        ]"#;
        let characters: Vec<Character> = serde_json::from_str(json).unwrap();
        assert_eq!(characters[0].mug_shot_id(), Some("co1abc"));
        assert_eq!(characters[0].first_game_name(), Some("The Witcher 3: Wild Hunt"));
        assert_eq!(characters[1].mug_shot_id(), None);
        assert_eq!(characters[1].first_game_name(), None);
    }
}
