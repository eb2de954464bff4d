use thiserror::Error;

#[derive(Debug, Error)]
pub enum IgdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to decode response at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl IgdbError {
    /// The API refused the bearer token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status_code: 401, .. })
    }
}
