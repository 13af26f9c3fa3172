#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://github.com/trending";
pub const DEFAULT_ORIGIN: &str = "https://github.com";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Resolved scraper settings, after defaults, file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    pub base_url: String,
    pub origin: String,
    pub user_agent: Option<String>,
    pub strict_status: bool,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            strict_status: false,
        }
    }
}

impl ConfigProvider for ScraperSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn strict_status(&self) -> bool {
        self.strict_status
    }
}

impl Validate for ScraperSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_url("origin", &self.origin)?;
        if let Some(agent) = &self.user_agent {
            validate_non_empty_string("user_agent", agent)?;
        }
        Ok(())
    }
}
