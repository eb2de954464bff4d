use reqwest::Client;

use crate::error::IgdbError;

const BASE_URL: &str = "https://api.igdb.com/v4";
const IMAGE_BASE_URL: &str = "https://images.igdb.com/igdb/image/upload";

pub struct IgdbClient {
    client: Client,
    base_url: String,
    client_id: String,
}

impl IgdbClient {
    pub fn new(client: Client, client_id: impl Into<String>) -> Self {
        Self::with_base_url(client, client_id, BASE_URL)
    }

    pub fn with_base_url(
        client: Client,
        client_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
        }
    }

    /// Build the 720p image URL for an image id
    pub fn image_url(image_id: &str) -> String {
        format!("{}/t_720p/{}.jpg", IMAGE_BASE_URL, image_id)
    }

    /// POST an Apicalypse query to an endpoint
    pub(crate) async fn query<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        token: &str,
        body: String,
    ) -> crate::Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .header("Client-ID", &self.client_id)
            .bearer_auth(token)
            .body(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(IgdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| IgdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
