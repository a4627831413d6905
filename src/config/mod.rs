use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const API_URL_VAR: &str = "USER_CRUD_API_URL";
pub const OFFLINE_VAR: &str = "USER_CRUD_OFFLINE";

/// Base URL used when `USER_CRUD_API_URL` is unset (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Effective runtime configuration, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    /// Serve users from memory instead of the REST API.
    #[serde(default)]
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            offline: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup(API_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => normalize_base_url(&raw)?,
            _ => DEFAULT_API_URL.to_string(),
        };
        let offline = lookup(OFFLINE_VAR).is_some_and(|value| is_truthy(&value));
        Ok(Self {
            api_base_url,
            offline,
        })
    }

    pub fn describe_backend(&self) -> String {
        if self.offline {
            "in-memory store".to_string()
        } else {
            self.api_base_url.clone()
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_string()))
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
