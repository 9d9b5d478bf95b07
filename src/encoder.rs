use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ScoringConfig;

/// Long-lived handle to a sentence-embedding service, built once at startup
/// and passed by reference into request handling.
///
/// The heuristic scoring formula does not consult the embeddings; the handle
/// exists so deployments that run the encoder keep an explicit, inspectable
/// reference to it instead of hidden global state, and so a future semantic
/// signal has a seam to plug into. API responses report `encoder_used:
/// false` until that happens.
#[derive(Clone)]
pub struct EncoderClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    text: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl EncoderClient {
    /// Returns `None` when the encoder is disabled in config.
    pub fn from_config(config: &ScoringConfig) -> Result<Option<Self>, String> {
        if !config.encoder.enabled {
            return Ok(None);
        }
        let timeout = Duration::from_millis(config.encoder.timeout_ms);
        EncoderClient::new(
            config.encoder.endpoint.clone(),
            config.encoder.model.clone(),
            timeout,
        )
        .map(Some)
    }

    pub fn new(endpoint: String, model: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build encoder client: {}", err))?;
        Ok(Self {
            endpoint,
            model,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, String> {
        let url = format!("{}/embed", self.endpoint.trim_end_matches('/'));
        let request = EmbedRequest {
            model: &self.model,
            text,
        };
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| format!("encoder request failed: {}", err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("encoder error {}: {}", status, body));
        }

        response
            .json::<EmbedResponse>()
            .await
            .map(|payload| payload.embedding)
            .map_err(|err| format!("encoder response parse failed: {}", err))
    }
}
