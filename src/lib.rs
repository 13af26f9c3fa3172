pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpPageSource, LocalStorage};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig, ScraperSettings};
pub use core::{
    export::OutputFormat, extract::extract_repositories, handler::handle,
    pipeline::TrendingPipeline, url::build_trending_url,
};
pub use domain::model::{Query, RepositorySummary, Since, TrendingResponse};
pub use domain::ports::Logger;
pub use utils::error::{Result, TrendingError};
pub use utils::logger::TracingLogger;
