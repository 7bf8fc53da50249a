#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_BASE_URL_ENV: &str = "LADYBUG_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)
    }
}
