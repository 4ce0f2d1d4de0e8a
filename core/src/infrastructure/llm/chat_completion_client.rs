use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{ChatCompletionReply, ChatCompletionRequest},
        ports::ChatCompletionClient,
    },
};

/// Client for an OpenAI-compatible `chat/completions` gateway.
#[derive(Debug, Clone)]
pub struct ChatCompletionHttpClient {
    api_key: Option<String>,
    endpoint: String,
    max_retries: u32,
    retry_backoff: Duration,
    client: Client,
}

impl ChatCompletionHttpClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config
                .api_key
                .as_ref()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            endpoint: config.endpoint.clone(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff,
            client,
        })
    }

    async fn call_gateway(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionReply, GatewayFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(GatewayFailure::Send)?;

        let status = response.status();
        match response.text().await {
            Ok(body) => Ok(ChatCompletionReply {
                status: status.as_u16(),
                body,
            }),
            // The status alone decides how an error reply is handled.
            Err(e) if !status.is_success() => {
                tracing::warn!(
                    status = status.as_u16(),
                    "Failed to read AI gateway error body: {}",
                    e
                );
                Ok(ChatCompletionReply {
                    status: status.as_u16(),
                    body: String::new(),
                })
            }
            Err(error) => Err(GatewayFailure::Body {
                status: status.as_u16(),
                error,
            }),
        }
    }
}

#[derive(Debug, Error)]
enum GatewayFailure {
    /// Nothing was answered, not even a status line.
    #[error("{0}")]
    Send(reqwest::Error),
    #[error("status {status} with an unreadable body: {error}")]
    Body { status: u16, error: reqwest::Error },
}

impl GatewayFailure {
    /// Connection failures and timeouts before a status arrived are worth
    /// another attempt; anything the gateway actually answered is not.
    fn is_transient(&self) -> bool {
        match self {
            GatewayFailure::Send(e) => e.is_timeout() || e.is_connect(),
            GatewayFailure::Body { .. } => false,
        }
    }
}

impl ChatCompletionClient for ChatCompletionHttpClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionReply, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ConfigurationError("LLM API key is not configured".to_string())
        })?;

        let mut attempt: u32 = 0;
        loop {
            match self.call_gateway(api_key, &request).await {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_backoff * attempt;
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "AI gateway request failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!("AI gateway request failed: {}", e);
                    return Err(CoreError::ExternalServiceError(format!(
                        "AI gateway request failed: {}",
                        e
                    )));
                }
            }
        }
    }
}
