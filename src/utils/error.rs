use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendingError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid selector `{selector}`: {message}")]
    SelectorError { selector: String, message: String },

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Extraction,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrendingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrendingError::RequestError(_) | TrendingError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            TrendingError::SelectorError { .. } | TrendingError::PatternError(_) => {
                ErrorCategory::Extraction
            }
            TrendingError::CsvError(_)
            | TrendingError::IoError(_)
            | TrendingError::SerializationError(_) => ErrorCategory::Output,
            TrendingError::ConfigError { .. }
            | TrendingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Extraction => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrendingError::RequestError(_) => {
                "Check network connectivity and that the trending page is reachable"
            }
            TrendingError::HttpStatus { .. } => {
                "The upstream page returned an error; retry later or disable --strict-status"
            }
            TrendingError::SelectorError { .. } | TrendingError::PatternError(_) => {
                "The built-in extraction rules are broken; this is a bug"
            }
            TrendingError::CsvError(_) | TrendingError::SerializationError(_) => {
                "Try another output format"
            }
            TrendingError::IoError(_) => "Check that the output path is writable",
            TrendingError::ConfigError { .. }
            | TrendingError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch trending repositories: {}", self),
            ErrorCategory::Extraction => format!("Could not read the trending page: {}", self),
            ErrorCategory::Output => format!("Could not write the results: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendingError>;
