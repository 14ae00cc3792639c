use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use crate::{GeminiError, ListModelsOutcome, ModelCatalog, ModelListing, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        info!("Creating GeminiClient (timeout={}s)", timeout.as_secs());
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeminiError::Client)?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[async_trait]
impl ModelCatalog for GeminiClient {
    async fn list_models(&self, api_key: &str) -> Result<ListModelsOutcome> {
        info!("Sending model listing request to {}", self.models_url());

        let response = self
            .client
            .get(self.models_url())
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(GeminiError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(GeminiError::transport)?;
        debug!("Model listing returned status {status} ({} bytes)", body.len());

        if status != StatusCode::OK {
            return Ok(ListModelsOutcome::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let listing: ModelListing = serde_json::from_str(&body)?;
        info!("Received {} models", listing.models.len());
        Ok(ListModelsOutcome::Authorized(listing.models))
    }
}
