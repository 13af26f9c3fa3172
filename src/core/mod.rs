pub mod export;
pub mod extract;
pub mod handler;
pub mod pipeline;
pub mod url;

pub use crate::domain::model::{Query, RepositorySummary, Since, TrendingResponse};
pub use crate::domain::ports::{ConfigProvider, Logger, PageSource, Storage};
pub use crate::utils::error::Result;
