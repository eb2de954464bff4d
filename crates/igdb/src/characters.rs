use crate::client::IgdbClient;
use crate::models::Character;

/// Escape a value for use inside an Apicalypse string literal
pub(crate) fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

pub(crate) fn search_body(query: &str, limit: u32) -> String {
    format!(
        "search \"{}\"; fields name, mug_shot.image_id; limit {};",
        escape_literal(query),
        limit
    )
}

pub(crate) fn games_body(id: i64) -> String {
    format!("where id = {}; fields name, games.name;", id)
}

impl IgdbClient {
    /// Search characters by name
    /// POST /characters
    pub async fn search_characters(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> crate::Result<Vec<Character>> {
        self.query("/characters", token, search_body(query, limit))
            .await
    }

    /// Get a character together with the names of its games
    /// POST /characters
    pub async fn get_character_games(
        &self,
        token: &str,
        id: i64,
    ) -> crate::Result<Option<Character>> {
        let characters: Vec<Character> = self.query("/characters", token, games_body(id)).await?;
        Ok(characters.into_iter().next())
    }
}
