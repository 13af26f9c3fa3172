use crate::core::{RepositorySummary, TrendingResponse};
use crate::utils::error::{Result, TrendingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn render(&self, response: &TrendingResponse) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(response),
            OutputFormat::Csv => to_csv(&response.repos),
        }
    }
}

pub fn to_json(response: &TrendingResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// One header row, then one row per repository in listing order.
pub fn to_csv(repos: &[RepositorySummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for repo in repos {
        writer.serialize(repo)?;
    }

    if repos.is_empty() {
        writer.write_record([
            "name",
            "description",
            "url",
            "author",
            "language",
            "stars",
            "todayStars",
        ])?;
    }

    let data = writer.into_inner().map_err(|e| TrendingError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| TrendingError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
