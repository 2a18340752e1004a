use crate::error::ProviderError;
use crate::search::{SearchProvider, SearchRequest, SearchResponse};
use async_trait::async_trait;

const API_URL: &str = "https://api.exa.ai/search";

/// Client for the Exa neural search API.
pub struct ExaClient {
    http: reqwest::Client,
    api_key: String,
}

impl ExaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for ExaClient {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ProviderError> {
        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
