use crate::prompt::PromptConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response could not be decoded: {0}")]
    Decode(String),

    #[error("provider response contained no text segment")]
    EmptyContent,
}

/// External text generator behind the endpoint.
#[async_trait]
pub trait EpisodeProvider: Send + Sync {
    /// Runs one generation with the fixed prompt. Called at most once per request.
    async fn generate(&self, prompt: &PromptConfig) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessagesResponse {
    pub fn first_text(self) -> Result<String, ProviderError> {
        self.content
            .into_iter()
            .filter(|block| block.kind == "text")
            .find_map(|block| block.text)
            .ok_or(ProviderError::EmptyContent)
    }
}

/// Anthropic Messages API client.
pub struct AnthropicProvider {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl EpisodeProvider for AnthropicProvider {
    async fn generate(&self, prompt: &PromptConfig) -> Result<String, ProviderError> {
        let body = MessagesRequest {
            model: &prompt.model,
            max_tokens: prompt.max_tokens,
            messages: [Message {
                role: "user",
                content: &prompt.prompt,
            }],
        };

        let response = self
            .http_client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: MessagesResponse =
            serde_json::from_slice(&bytes).map_err(|err| ProviderError::Decode(err.to_string()))?;
        parsed.first_text()
    }
}
