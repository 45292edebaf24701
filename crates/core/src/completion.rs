//! Chat-completion client.
//!
//! Speaks the OpenAI-compatible `chat/completions` wire format: a system and a user
//! message go out, the generated text comes back at `choices[0].message.content`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::{RelayError, RelayResult};

/// Source of generated text for a prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion. Never retries.
    async fn complete(&self, system: &str, user: &str) -> RelayResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible completion gateway.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl ChatCompletionClient {
    /// No request timeout is set; the transport default applies.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Map a non-success upstream status onto the relay error taxonomy.
pub fn map_upstream_status(status: StatusCode, body: String) -> RelayError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => RelayError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => RelayError::ServiceUnavailable,
        other => RelayError::UpstreamError {
            status: Some(other.as_u16()),
            body,
        },
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> RelayResult<String> {
        let body = ChatCompletionRequest {
            model: self.config.model(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(self.config.api_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("AI gateway request failed: {}", e);
                RelayError::UpstreamError {
                    status: None,
                    body: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "AI gateway error");
            return Err(map_upstream_status(status, body));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("AI gateway returned an unreadable body: {}", e);
            RelayError::UpstreamError {
                status: Some(status.as_u16()),
                body: e.to_string(),
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or(RelayError::EmptyUpstreamResponse)
    }
}
