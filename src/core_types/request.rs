//! The `request` field carried by attribute-missing errors
//!
//! Provider libraries sometimes raise attribute-missing errors on objects that
//! downstream code expects to expose a `request`. Instead of attaching that
//! field after the fact, errors declare it up front as a [`RequestSlot`].

use serde::{Deserialize, Serialize};

/// Description of the request that was in flight when an error occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Provider that served the request
    pub provider: String,
    /// Model the request targeted
    pub model: String,
    /// Caller-assigned request identifier
    pub request_id: String,
}

impl RequestInfo {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            request_id: request_id.into(),
        }
    }
}

/// State of the `request` field on an error
///
/// `Missing` and `Null` are distinct: `Null` means the field exists and holds
/// the null sentinel, `Missing` means it was never set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RequestSlot {
    /// Field absent
    #[default]
    Missing,
    /// Field present, set to the null sentinel
    Null,
    /// Field present with a value
    Present(RequestInfo),
}

impl RequestSlot {
    /// Whether the field exists (either `Null` or `Present`)
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The request value, if one was set
    pub fn info(&self) -> Option<&RequestInfo> {
        match self {
            Self::Present(info) => Some(info),
            Self::Missing | Self::Null => None,
        }
    }
}

impl From<Option<RequestInfo>> for RequestSlot {
    fn from(value: Option<RequestInfo>) -> Self {
        match value {
            Some(info) => Self::Present(info),
            None => Self::Null,
        }
    }
}
