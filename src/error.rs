//! Error types for guarded completion calls.
//!
//! This module provides structured error handling for completion operations,
//! including categorization, severity levels, and retry guidance.
//!
//! # Error Types
//!
//! The main error type is [`LlmError`], which covers the failure modes a guarded
//! completion can surface:
//! - Attribute-missing errors raised by provider libraries
//! - Configuration errors (invalid guard settings)
//! - Request failures and provider API errors
//! - Timeouts
//!
//! # The `request` field
//!
//! [`LlmError::AttributeMissing`] declares a `request` field up front as a
//! [`RequestSlot`]. It starts out [`RequestSlot::Missing`] and is backfilled by
//! [`RequestPatchGuard`](crate::guard::RequestPatchGuard) when the error message
//! carries the known marker.
//!
//! ```rust
//! use llm_request_guard::{LlmError, RequestSlot};
//!
//! let mut err = LlmError::attribute_missing("Exception", "request");
//! assert!(!err.has_request());
//!
//! err.set_request(None);
//! assert_eq!(err.request_slot(), &RequestSlot::Null);
//! ```

use crate::core_types::request::{RequestInfo, RequestSlot};
use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`LlmError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (LLM providers, network issues).
    External,

    /// Internal system errors (bugs, library invariant violations).
    ///
    /// Attribute-missing errors land here: they come from provider library
    /// code touching a field that doesn't exist.
    Internal,

    /// Client errors (invalid input, configuration).
    Client,

    /// Temporary failures that should be retried.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

// ============================================================================
// LLM Error types
// ============================================================================

/// Convenient result type for guarded operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

const ATTRIBUTE_SEPARATOR: &str = "' object has no attribute '";

static MISSING_REQUEST: RequestSlot = RequestSlot::Missing;

/// Errors that can occur during completion operations.
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `AttributeMissing` | Internal | No |
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `ApiError` | External (5xx), Transient (429), Client (4xx) | 5xx and 429 |
/// | `Timeout` | Transient | Yes |
/// | `Other` | Internal | No |
#[derive(Error, Debug)]
pub enum LlmError {
    /// An object was missing an attribute that code tried to read.
    ///
    /// The `Display` form is exactly `message`, so substring checks see the
    /// provider's original text.
    #[error("{message}")]
    AttributeMissing {
        /// Type name of the object, when the message has the canonical shape.
        object: Option<String>,
        /// Name of the missing attribute, when the message has the canonical shape.
        attribute: Option<String>,
        /// Original message.
        message: String,
        /// The `request` field; absent until set.
        request: RequestSlot,
    },

    /// Guard or client configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The request to the provider failed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider answered with an error status.
    #[error("Provider API error ({status_code}): {message}")]
    ApiError {
        /// HTTP status code returned by the provider.
        status_code: u16,
        /// Provider error message.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// Any other failure raised by a provider.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LlmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AttributeMissing { .. } => ErrorCategory::Internal,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ApiError { status_code, .. } if *status_code == 429 => ErrorCategory::Transient,
            Self::ApiError { status_code, .. } if *status_code < 500 => ErrorCategory::Client,
            Self::ApiError { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::Other(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttributeMissing { .. } => ErrorSeverity::Warning,
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ApiError { .. } => ErrorSeverity::Error,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Whether this error is transient and should trigger a retry.
    ///
    /// Returns `true` for timeouts, general request failures, rate limiting
    /// (429) and server-side (5xx) API errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed { .. } | Self::Timeout { .. } => true,
            Self::ApiError { status_code, .. } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }

    /// Convert to a user-friendly message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::AttributeMissing { .. } | Self::Other(_) => {
                "Something went wrong while contacting the AI service".to_string()
            }
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to communicate with AI service. Please try again".to_string()
            }
            Self::ApiError { status_code, .. } if *status_code >= 500 => {
                "The AI service is having trouble. Please try again".to_string()
            }
            Self::ApiError { .. } => "The AI service rejected the request".to_string(),
            Self::Timeout { .. } => "Request timed out. Please try again".to_string(),
        }
    }

    // =========================================================================
    // The `request` field
    // =========================================================================

    /// Whether the error carries a `request` field (null or set).
    ///
    /// Only [`LlmError::AttributeMissing`] can carry one.
    pub fn has_request(&self) -> bool {
        self.request_slot().is_present()
    }

    /// Current state of the `request` field.
    pub fn request_slot(&self) -> &RequestSlot {
        match self {
            Self::AttributeMissing { request, .. } => request,
            _ => &MISSING_REQUEST,
        }
    }

    /// Set the `request` field. `None` stores the null sentinel.
    ///
    /// Returns `false` and leaves the error untouched when the variant has no
    /// `request` field.
    pub fn set_request(&mut self, value: Option<RequestInfo>) -> bool {
        match self {
            Self::AttributeMissing { request, .. } => {
                *request = value.into();
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an attribute-missing error from object and attribute names.
    ///
    /// The message follows the canonical
    /// `'<object>' object has no attribute '<attribute>'` form.
    pub fn attribute_missing(object: impl Into<String>, attribute: impl Into<String>) -> Self {
        let object = object.into();
        let attribute = attribute.into();
        let message = format!("'{object}{sep}{attribute}'", sep = ATTRIBUTE_SEPARATOR);
        log_warn!(
            error_type = "attribute_missing",
            object = %object,
            attribute = %attribute,
            "Object is missing an expected attribute"
        );
        Self::AttributeMissing {
            object: Some(object),
            attribute: Some(attribute),
            message,
            request: RequestSlot::Missing,
        }
    }

    /// Create an attribute-missing error from a message produced by an external
    /// library. Object and attribute names are extracted when the message has the
    /// canonical shape.
    pub fn attribute_missing_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let (object, attribute) = parse_attribute_message(&message);
        log_warn!(
            error_type = "attribute_missing",
            message = %message,
            structured = object.is_some(),
            "Object is missing an expected attribute"
        );
        Self::AttributeMissing {
            object,
            attribute,
            message,
            request: RequestSlot::Missing,
        }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Guard configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "LLM request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn api_error(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "api_error",
            status_code = status_code,
            message = %message,
            "LLM provider returned an error status"
        );
        Self::ApiError {
            status_code,
            message,
        }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "LLM request timed out"
        );
        Self::Timeout { timeout_seconds }
    }
}

/// Split `'<object>' object has no attribute '<attribute>'` into its names.
fn parse_attribute_message(message: &str) -> (Option<String>, Option<String>) {
    let Some((head, tail)) = message.split_once(ATTRIBUTE_SEPARATOR) else {
        return (None, None);
    };
    let object = head.rfind('\'').map(|start| head[start + 1..].to_string());
    let attribute = tail.split_once('\'').map(|(name, _)| name.to_string());
    match (object, attribute) {
        (Some(object), Some(attribute)) => (Some(object), Some(attribute)),
        _ => (None, None),
    }
}
