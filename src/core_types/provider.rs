//! Provider trait and types for completion calls
//!
//! Defines the `CompletionProvider` trait that models the underlying completion
//! operation, along with its request/response types. The guard treats providers
//! as opaque: it only observes the `LlmResult` they produce.

use crate::error::LlmResult;
use serde::{Deserialize, Serialize};

/// Completion request handed to a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompletionRequest {
    /// Caller-assigned identifier, used for log correlation
    pub request_id: String,
    /// Model to run the completion against
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature setting for response randomness (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CompletionRequest {
    pub fn new(
        request_id: impl Into<String>,
        model: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            model: model.into(),
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used (prompt + completion)
    pub total_tokens: u32,
}

/// Response from a completion call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionResponse {
    /// Primary text content of the response
    pub content: String,
    /// Model that generated the response
    pub model: Option<String>,
    /// Token usage information
    pub usage: Option<TokenUsage>,
}

/// Trait for completion providers to implement
///
/// Anything that can turn a [`CompletionRequest`] into a [`CompletionResponse`]
/// qualifies: an HTTP client, an in-process model, or a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a single completion
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse>;

    /// Get provider name for logging and debugging
    fn provider_name(&self) -> &'static str;
}
