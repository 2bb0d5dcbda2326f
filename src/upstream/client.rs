//! OpenRouter client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::{UpstreamConfig, SYSTEM_PROMPT};

use super::error::UpstreamError;
use super::provider::ChatCompletion;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope};

/// Substituted when the upstream returns an empty completion
pub const EMPTY_ANSWER_FALLBACK: &str = "Sorry, I received an empty answer from the API.";

/// Detail reported when no credential is configured
pub const MISSING_KEY_MESSAGE: &str = "OPENROUTER_API_KEY not configured.";

/// Client for the OpenRouter chat-completion endpoint
pub struct OpenRouterClient {
    /// HTTP client for making requests
    http_client: Client,
    config: UpstreamConfig,
}

impl OpenRouterClient {
    /// Create a new client
    ///
    /// A missing credential is not an error here; it is reported on every
    /// call to [`ChatCompletion::ask`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Gateway(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Build the request body for a question
    fn build_request(&self, question: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(question)],
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenRouterClient {
    async fn ask(&self, question: &str) -> Result<String, UpstreamError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| UpstreamError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

        let request = self.build_request(question);
        debug!(model = %request.model, url = %self.config.url, "Sending chat completion");

        let response = self
            .http_client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.app_name)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Turn an upstream status and body into an answer or a typed error
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, UpstreamError> {
    if !status.is_success() {
        let message = ErrorEnvelope::message_from(body).unwrap_or_else(|| body.to_string());
        warn!(status = status.as_u16(), %message, "Upstream rejected request");
        return Err(UpstreamError::UpstreamRejected {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| UpstreamError::Gateway(format!("Invalid response body: {}", e)))?;

    Ok(parsed
        .first_content()
        .unwrap_or(EMPTY_ANSWER_FALLBACK)
        .to_string())
}
