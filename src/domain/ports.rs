use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Trending listing address, without language or query suffix.
    fn base_url(&self) -> &str;
    /// Prefix joined with each card's relative link.
    fn origin(&self) -> &str;
    fn user_agent(&self) -> Option<&str>;
    /// Treat a non-2xx response as a failure instead of extracting its body.
    fn strict_status(&self) -> bool;
}

/// Where the trending page body comes from.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Logging collaborator handed to the request handler.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}
