#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BASE_URL_ENV: &str = "ACTIVATION_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// `ACTIVATION_API_BASE_URL` when set and non-empty, otherwise the local dev server.
fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn default_user_agent() -> String {
    format!("activation-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Connection settings shared by every request an [`HttpClient`](crate::HttpClient) issues.
///
/// Built once, then handed to the client by value; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub bearer_token: Option<String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            bearer_token: None,
            headers: BTreeMap::new(),
        }
    }

    /// Reads the base URL from `ACTIVATION_API_BASE_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        let base_url = default_base_url();
        tracing::debug!("Using base URL {}", base_url);
        Self::new(base_url)
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        if let Some(token) = &self.bearer_token {
            validate_non_empty_string("bearer_token", token)?;
        }
        for name in self.headers.keys() {
            validate_non_empty_string("headers", name)?;
        }
        Ok(())
    }
}
