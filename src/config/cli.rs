use crate::config::toml_config::TomlConfig;
use crate::config::ScraperSettings;
use crate::core::export::OutputFormat;
use crate::core::{Query, Since};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "trending-scraper")]
#[command(about = "List trending GitHub repositories")]
pub struct CliConfig {
    #[arg(long, help = "Only repositories written in this language")]
    pub language: Option<String>,

    #[arg(long, value_enum, help = "Trending time window")]
    pub since: Option<Since>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Treat a non-2xx response as a failure")]
    pub strict_status: bool,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[arg(long, help = "Write the result to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn query(&self) -> Query {
        Query::new(self.language.clone(), self.since)
    }

    /// `--output` with the format's extension added when it has none.
    pub fn output_path(&self) -> Option<PathBuf> {
        let output = PathBuf::from(self.output.as_ref()?);
        if output.extension().is_some() {
            return Some(output);
        }
        Some(output.with_extension(self.format.extension()))
    }

    /// Defaults, then the config file, then command line flags.
    pub fn settings(&self) -> Result<ScraperSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => ScraperSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(origin) = &self.origin {
            settings.origin = origin.clone();
        }
        if let Some(agent) = &self.user_agent {
            settings.user_agent = Some(agent.clone());
        }
        if self.strict_status {
            settings.strict_status = true;
        }

        Ok(settings)
    }
}
