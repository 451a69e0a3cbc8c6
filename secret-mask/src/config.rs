//! Masking configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`MaskingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid masking configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Administrative switch for secret masking on the API.
///
/// Masking is off unless `maskPasswordsAPI` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingConfig {
    #[serde(default, rename = "maskPasswordsAPI", alias = "maskPasswordsApi")]
    pub mask_passwords_api: bool,
}

impl MaskingConfig {
    pub const fn enabled() -> Self {
        Self {
            mask_passwords_api: true,
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
