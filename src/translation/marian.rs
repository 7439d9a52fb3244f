// OPUS-MT (MarianMT) adapter over a Hugging Face Inference compatible endpoint

use super::{Translation, Translator};
use crate::config::ModelsConfig;
use crate::error::{BridgeError, Result};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    translation_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// Build the HTTP client shared by every adapter.
pub fn http_client(config: &ModelsConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_nodelay(true)
        .use_rustls_tls()
        .build()
        .map_err(|e| BridgeError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Adapter for a single pretrained translation model.
///
/// Marshals the text into the model's `{"inputs": ...}` request form and
/// returns every generated sequence as one segment.
pub struct MarianAdapter {
    http_client: Client,
    endpoint: String,
    model_id: String,
    api_token: Option<String>,
}

impl MarianAdapter {
    pub fn new(http_client: Client, config: &ModelsConfig, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let endpoint = format!(
            "{}/models/{}",
            config.api_base_url.trim_end_matches('/'),
            model_id
        );

        Self {
            http_client,
            endpoint,
            model_id,
            api_token: config.api_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extract error message from an inference error body
    fn extract_error_message(body: &str) -> Option<String> {
        serde_json::from_str::<InferenceError>(body)
            .ok()
            .map(|e| e.error)
    }
}

#[async_trait]
impl Translator for MarianAdapter {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn translate(&self, text: &str) -> Result<Translation> {
        debug!("Calling {} ({} chars)", self.endpoint, text.chars().count());

        let mut request = self
            .http_client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            BridgeError::ModelInvocation(format!("{}: {}", self.model_id, sanitize(&e.to_string())))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            BridgeError::ModelInvocation(format!("{}: {}", self.model_id, e))
        })?;

        if !status.is_success() {
            let message = Self::extract_error_message(&body).unwrap_or(body);
            error!("Model {} returned HTTP {}: {}", self.model_id, status, sanitize(&message));
            return Err(BridgeError::ModelInvocation(format!(
                "{} returned HTTP {}",
                self.model_id,
                status.as_u16()
            )));
        }

        let sequences: Vec<GeneratedSequence> = serde_json::from_str(&body).map_err(|e| {
            BridgeError::ModelInvocation(format!("{}: invalid response: {}", self.model_id, e))
        })?;

        Ok(Translation::Segments(
            sequences.into_iter().map(|s| s.translation_text).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = ModelsConfig {
            api_base_url: "http://localhost:9000/".to_string(),
            ..ModelsConfig::default()
        };
        let client = http_client(&config).unwrap();
        let adapter = MarianAdapter::new(client, &config, "Helsinki-NLP/opus-mt-en-ru");

        assert_eq!(
            adapter.endpoint(),
            "http://localhost:9000/models/Helsinki-NLP/opus-mt-en-ru"
        );
        assert_eq!(adapter.model_id(), "Helsinki-NLP/opus-mt-en-ru");
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":"Model is currently loading","estimated_time":20.0}"#;
        assert_eq!(
            MarianAdapter::extract_error_message(body).as_deref(),
            Some("Model is currently loading")
        );
        assert!(MarianAdapter::extract_error_message("bad gateway").is_none());
    }
}
