//! OpenAI-compatible generation client
//!
//! Performs one POST per generation action carrying the fixed system prompt
//! plus the user's prompt, and hands back the first choice's message content
//! as plain text. Everything else (status checks, body decoding) either
//! succeeds or becomes a `TransportError`.

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const BODY_SNIPPET_CHARS: usize = 320;

/// Contract the model output has to satisfy for the sandbox. Sent as the
/// system message on every request.
const SYSTEM_PROMPT: &str = "You are a senior frontend engineer. \
Given a user prompt, return ONLY a single anonymous React arrow function \
like `() => (...)` using JSX and Tailwind CSS classes. \
Use React.useState or React.useEffect for interactivity. \
Do NOT include import, export, require, render calls, or markdown fences. \
The output must be ready to evaluate as the body of `render(<Component />)`. \
If an image is needed, use https://placehold.co/400x300. \
Never return explanations, comments, or markdown.";

/// Seam between the calling layer and whatever produces raw model text.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    /// Turn one prompt into raw model text, or fail.
    async fn generate(&self, prompt: &str) -> Result<String, TransportError>;
}

/// Configuration for `GenerationClient`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Bearer token for the upstream API
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl TransportConfig {
    /// Configuration with the default endpoint, model, and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// With a different endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// With a different model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With a different per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Reqwest-backed implementation of `GenerationTransport`.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    config: TransportConfig,
    client: Client,
}

impl GenerationClient {
    /// Build a client from `config`.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl GenerationTransport for GenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, TransportError> {
        tracing::info!(model = %self.config.model, "requesting component generation");

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "upstream rejected generation request");
            return Err(TransportError::UpstreamStatus {
                status: status.as_u16(),
                body: truncate(&body, BODY_SNIPPET_CHARS),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(TransportError::MissingContent)?;

        tracing::debug!(chars = content.len(), "received model output");
        Ok(content)
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}
