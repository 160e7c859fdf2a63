//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::core_types::provider::{CompletionRequest, CompletionResponse, TokenUsage};
use crate::core_types::request::RequestInfo;
use crate::error::LlmError;

pub const FOREIGN_ATTRIBUTE_MESSAGE: &str = "'Foo' object has no attribute 'bar'";

/// Attribute-missing error carrying the default marker, field not yet set
pub fn marker_error() -> LlmError {
    LlmError::attribute_missing_message("'Exception' object has no attribute 'request'")
}

/// Attribute-missing error with an unrelated message
pub fn foreign_attribute_error() -> LlmError {
    LlmError::attribute_missing_message(FOREIGN_ATTRIBUTE_MESSAGE)
}

pub fn create_test_request() -> CompletionRequest {
    CompletionRequest::new("req-001", "gpt-4", "Say hello")
}

pub fn create_test_response() -> CompletionResponse {
    CompletionResponse {
        content: "Hello!".to_string(),
        model: Some("gpt-4".to_string()),
        usage: Some(TokenUsage {
            prompt_tokens: 3,
            completion_tokens: 2,
            total_tokens: 5,
        }),
    }
}

pub fn create_test_request_info() -> RequestInfo {
    RequestInfo::new("openai", "gpt-4", "req-001")
}
