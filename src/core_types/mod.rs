//! Core types for guarded completion calls
//!
//! ## Organization
//! - `request` - The `request` field carried by attribute-missing errors
//! - `provider` - Completion provider trait and request/response types

pub mod provider;
pub mod request;

// Re-export commonly used types
pub use provider::{CompletionProvider, CompletionRequest, CompletionResponse, TokenUsage};
pub use request::{RequestInfo, RequestSlot};
