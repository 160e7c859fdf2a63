//! Test helper utilities for llm-request-guard integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use async_trait::async_trait;
use llm_request_guard::{
    CompletionProvider, CompletionRequest, CompletionResponse, LlmError, LlmResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a [`ScriptedProvider`] answers every call
#[derive(Debug, Clone)]
pub enum Script {
    Succeed(String),
    MissingAttribute(String),
    ApiFailure(u16, String),
}

/// Provider stand-in that answers every completion according to its script
pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Succeed(content) => Ok(CompletionResponse {
                content: content.clone(),
                model: Some(request.model),
                usage: None,
            }),
            Script::MissingAttribute(message) => {
                Err(LlmError::attribute_missing_message(message.clone()))
            }
            Script::ApiFailure(status, message) => {
                Err(LlmError::api_error(*status, message.clone()))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

pub fn create_test_request() -> CompletionRequest {
    CompletionRequest {
        max_tokens: Some(64),
        temperature: Some(0.2),
        ..CompletionRequest::new("req-int-1", "test-model", "Say hello")
    }
}
