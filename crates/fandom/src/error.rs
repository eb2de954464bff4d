#[derive(Debug, thiserror::Error)]
pub enum FandomError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to decode response at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid category pattern: {0}")]
    Pattern(#[from] regex::Error),
}
