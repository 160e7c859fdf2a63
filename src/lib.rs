//! # llm-request-guard
//!
//! Error guard for LLM completion calls.
//!
//! Some provider libraries fail with an attribute-missing error reading
//! `'Exception' object has no attribute 'request'`. Code downstream of the call
//! often reads the error's `request` field for logging or retry decisions, and
//! would fail again on that error. [`RequestPatchGuard`] wraps the call and
//! backfills `request` with a null sentinel on exactly those errors; every other
//! result is returned untouched.
//!
//! ## Example
//!
//! ```rust
//! use llm_request_guard::{LlmError, RequestPatchGuard, RequestSlot};
//!
//! let guard = RequestPatchGuard::default();
//!
//! let result: Result<u32, LlmError> =
//!     guard.invoke(|| Err(LlmError::attribute_missing("Exception", "request")));
//!
//! let err = result.unwrap_err();
//! assert!(err.has_request());
//! assert_eq!(err.request_slot(), &RequestSlot::Null);
//!
//! assert_eq!(guard.invoke(|| Ok::<_, LlmError>(42)).unwrap(), 42);
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod guard;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::GuardedClient;
pub use config::{GuardConfig, DEFAULT_REQUEST_MARKER};
pub use error::{ErrorCategory, ErrorSeverity, LlmError, LlmResult};
pub use guard::RequestPatchGuard;

pub use core_types::{
    CompletionProvider, CompletionRequest, CompletionResponse, RequestInfo, RequestSlot,
    TokenUsage,
};
