use async_trait::async_trait;
use reqwest::Client;

use crate::error::IgdbError;
use crate::models::IssuedToken;
use crate::token::TokenExchange;

const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// Twitch application credentials
#[derive(Debug, Clone, Default)]
pub struct TwitchCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl TwitchCredentials {
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }
}

/// Client-credentials exchange against the Twitch identity provider
pub struct TwitchAuth {
    client: Client,
    token_url: String,
    credentials: TwitchCredentials,
}

impl TwitchAuth {
    pub fn new(client: Client, credentials: TwitchCredentials) -> Self {
        Self::with_token_url(client, credentials, TOKEN_URL)
    }

    pub fn with_token_url(
        client: Client,
        credentials: TwitchCredentials,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            credentials,
        }
    }
}

#[async_trait]
impl TokenExchange for TwitchAuth {
    /// POST /oauth2/token?grant_type=client_credentials
    async fn exchange(&self) -> crate::Result<IssuedToken> {
        if !self.credentials.is_configured() {
            return Err(IgdbError::Auth("Twitch credentials are not configured".into()));
        }

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let response = self
            .client
            .post(&self.token_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IgdbError::Auth(format!(
                "Token request failed: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let token: IssuedToken = response.json().await?;
        Ok(token)
    }
}
