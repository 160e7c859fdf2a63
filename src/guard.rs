//! Request-field patching for attribute-missing errors
//!
//! Some provider libraries raise an attribute-missing error whose message reads
//! `'Exception' object has no attribute 'request'`. Downstream code that reads
//! the error's `request` field would then fail a second time. The guard runs an
//! operation and, when it fails with such an error, backfills `request` with the
//! null sentinel before handing the same error back.
//!
//! Everything else passes through untouched: successful results, attribute
//! errors with other messages, and every other error kind.

use crate::config::GuardConfig;
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_warn};
use std::future::Future;

/// Wraps operations and patches the `request` field on matching errors
#[derive(Debug, Clone, Default)]
pub struct RequestPatchGuard {
    config: GuardConfig,
}

impl RequestPatchGuard {
    /// Create a guard from a validated config
    pub fn new(config: GuardConfig) -> LlmResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run `operation` and patch its error if it matches
    pub fn invoke<T, F>(&self, operation: F) -> LlmResult<T>
    where
        F: FnOnce() -> LlmResult<T>,
    {
        operation().map_err(|error| self.intercept(error))
    }

    /// Await `operation` and patch its error if it matches
    pub async fn invoke_async<T, Fut>(&self, operation: Fut) -> LlmResult<T>
    where
        Fut: Future<Output = LlmResult<T>>,
    {
        operation.await.map_err(|error| self.intercept(error))
    }

    /// Whether `error` is an attribute-missing error carrying the marker
    pub fn matches(&self, error: &LlmError) -> bool {
        matches!(error, LlmError::AttributeMissing { .. })
            && error.to_string().contains(self.config.marker.as_str())
    }

    /// Backfill `request` with the null sentinel on a matching error.
    ///
    /// Returns whether the error was modified. Any value already stored in the
    /// field is replaced; an error already holding the sentinel is left as is,
    /// so repeated calls are no-ops.
    pub fn patch(&self, error: &mut LlmError) -> bool {
        if !self.config.enabled || !self.matches(error) {
            return false;
        }
        if error.request_slot().is_null() {
            return false;
        }
        error.set_request(None)
    }

    fn intercept(&self, mut error: LlmError) -> LlmError {
        if self.patch(&mut error) {
            if self.config.log_patches {
                log_warn!(
                    error_type = "attribute_missing",
                    message = %error,
                    "Backfilled missing request field on provider error"
                );
            }
        } else if let LlmError::AttributeMissing { attribute, .. } = &error {
            log_debug!(
                attribute = ?attribute,
                request_present = error.has_request(),
                "Attribute error did not need patching, propagating unchanged"
            );
        }

        error
    }
}
