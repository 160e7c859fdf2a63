use crate::config::GuardConfig;
use crate::core_types::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
use crate::error::LlmResult;
use crate::guard::RequestPatchGuard;
use crate::logging::log_debug;
use async_trait::async_trait;
use std::sync::Arc;

/// Completion client that routes every call through a [`RequestPatchGuard`]
///
/// Implements [`CompletionProvider`] itself, so it can stand in anywhere the
/// wrapped provider was used.
pub struct GuardedClient {
    provider: Arc<dyn CompletionProvider>,
    guard: RequestPatchGuard,
}

impl GuardedClient {
    /// Wrap `provider` with a guard built from `config`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`](crate::LlmError::ConfigurationError)
    /// if the config fails validation.
    pub fn new(provider: Arc<dyn CompletionProvider>, config: GuardConfig) -> LlmResult<Self> {
        let guard = RequestPatchGuard::new(config)?;
        log_debug!(
            provider = provider.provider_name(),
            guard_enabled = guard.config().enabled,
            "Creating guarded completion client"
        );
        Ok(Self { provider, guard })
    }

    /// Wrap `provider` with the default guard
    pub fn from_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            guard: RequestPatchGuard::default(),
        }
    }

    pub fn guard(&self) -> &RequestPatchGuard {
        &self.guard
    }
}

#[async_trait]
impl CompletionProvider for GuardedClient {
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        log_debug!(
            provider = self.provider.provider_name(),
            request_id = %request.request_id,
            model = %request.model,
            "Executing guarded completion"
        );
        self.guard.invoke_async(self.provider.complete(request)).await
    }

    fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}
