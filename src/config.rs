use crate::error::{LlmError, LlmResult};
use serde::{Deserialize, Serialize};

/// Marker text identifying the attribute-missing errors the guard patches
pub const DEFAULT_REQUEST_MARKER: &str = "'Exception' object has no attribute 'request'";

/// Configuration for [`RequestPatchGuard`](crate::guard::RequestPatchGuard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// When false the guard passes every result through untouched
    pub enabled: bool,
    /// Substring searched for in the error message
    pub marker: String,
    /// Emit a warning each time an error is patched
    pub log_patches: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: DEFAULT_REQUEST_MARKER.to_string(),
            log_patches: true,
        }
    }
}

impl GuardConfig {
    /// Config that never patches anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Validate guard configuration
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the marker is empty, since an
    /// empty substring would match every attribute-missing error.
    pub fn validate(&self) -> LlmResult<()> {
        if self.marker.is_empty() {
            return Err(LlmError::configuration_error("Guard marker must not be empty"));
        }
        Ok(())
    }

    /// Parse a config from its JSON representation. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> LlmResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            LlmError::configuration_error(format!("Invalid guard configuration: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
