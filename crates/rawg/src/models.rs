use serde::{Deserialize, Serialize};

/// Game item from GET /games
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub background_image: Option<String>,
    pub released: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub results: Vec<Game>,
}
