use crate::config::ScraperSettings;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TrendingError};
use crate::utils::validation::Validate;
use std::env;

pub const ENV_BASE_URL: &str = "TRENDING_BASE_URL";
pub const ENV_ORIGIN: &str = "TRENDING_ORIGIN";
pub const ENV_USER_AGENT: &str = "TRENDING_USER_AGENT";
pub const ENV_STRICT_STATUS: &str = "TRENDING_STRICT_STATUS";

/// Settings for the serverless handler, read from the environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub settings: ScraperSettings,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = ScraperSettings::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            settings.base_url = base_url;
        }
        if let Some(origin) = lookup(ENV_ORIGIN) {
            settings.origin = origin;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            settings.user_agent = Some(agent).filter(|a| !a.is_empty());
        }
        if let Some(strict) = lookup(ENV_STRICT_STATUS) {
            settings.strict_status = parse_flag(ENV_STRICT_STATUS, &strict)?;
        }

        Ok(Self { settings })
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(TrendingError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

impl ConfigProvider for LambdaConfig {
    fn base_url(&self) -> &str {
        self.settings.base_url()
    }

    fn origin(&self) -> &str {
        self.settings.origin()
    }

    fn user_agent(&self) -> Option<&str> {
        self.settings.user_agent()
    }

    fn strict_status(&self) -> bool {
        self.settings.strict_status()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_unset_environment_uses_defaults() {
        let config = LambdaConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.settings, ScraperSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://127.0.0.1:9000/trending"),
            (ENV_ORIGIN, "http://127.0.0.1:9000"),
            (ENV_USER_AGENT, ""),
            (ENV_STRICT_STATUS, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9000/trending");
        assert_eq!(config.origin(), "http://127.0.0.1:9000");
        assert_eq!(config.user_agent(), None);
        assert!(config.strict_status());
    }

    #[test]
    fn test_bad_strict_flag_is_rejected() {
        let result = LambdaConfig::from_lookup(lookup_from(&[(ENV_STRICT_STATUS, "maybe")]));
        assert!(matches!(
            result,
            Err(TrendingError::InvalidConfigValueError { .. })
        ));
    }
}
