//! Anthropic Messages API client.
//!
//! A thin, single-shot client: one POST to `/v1/messages` per request, no
//! retries, no streaming. The request timeout is explicit and configurable
//! rather than inherited from the HTTP library's default.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::LlmError;

/// Default Anthropic API endpoint.
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// API version header value required by the Messages API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A message in a conversation with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender ("user" or "assistant").
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a completion from the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System instruction, sent as a top-level field (not a message role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl CompletionRequest {
    /// Create a new completion request.
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages,
            system: None,
        }
    }

    /// Set the system instruction for this request.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// One content block of a Messages API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block type ("text" for all blocks this crate consumes).
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text payload, present on "text" blocks.
    #[serde(default)]
    pub text: String,
}

/// Token usage statistics for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Response from the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Unique identifier for this response.
    pub id: String,
    /// Model that generated this response.
    pub model: String,
    /// Generated content blocks.
    pub content: Vec<ContentBlock>,
    /// Reason the generation stopped (e.g. "end_turn", "max_tokens").
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Text of the first content block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| block.text.as_str())
    }
}

/// Error response body from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields kept for complete API error deserialization
struct ApiErrorDetail {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: String,
}

/// Trait for providers that can complete a metadata request.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run a single completion for the given request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    /// HTTP client for making API requests.
    http_client: Client,
    /// API key sent in the `x-api-key` header.
    api_key: String,
    /// Base URL for the API.
    base_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given API key and the default endpoint
    /// and timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_config(
            api_key,
            ANTHROPIC_BASE_URL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a new client with an explicit base URL and request timeout.
    ///
    /// The custom base URL is how tests point the client at a local stub
    /// server instead of the real API.
    pub fn with_config(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client - system TLS configuration error"),
            api_key,
            base_url,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key (for debugging, returns masked value).
    pub fn api_key_masked(&self) -> String {
        if self.api_key.len() <= 8 {
            "*".repeat(self.api_key.len())
        } else {
            format!(
                "{}...{}",
                &self.api_key[..4],
                &self.api_key[self.api_key.len() - 4..]
            )
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = format!("{}/v1/messages", self.base_url);

        let http_response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = http_response.status();

        if !status.is_success() {
            let status_code = status.as_u16();

            let error_text = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            // Prefer the structured error body when the API sent one
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                if status_code == 429 {
                    return Err(LlmError::RateLimited(error_response.error.message));
                }

                return Err(LlmError::ApiError {
                    code: status_code,
                    message: error_response.error.message,
                });
            }

            return Err(LlmError::ApiError {
                code: status_code,
                message: error_text,
            });
        }

        http_response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse API response: {}", e)))
    }
}
