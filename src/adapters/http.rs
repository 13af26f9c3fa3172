use crate::core::{ConfigProvider, PageSource};
use crate::utils::error::{Result, TrendingError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches pages over HTTP with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    strict_status: bool,
}

impl HttpPageSource {
    pub fn new(user_agent: Option<&str>, strict_status: bool) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            client: builder.build()?,
            strict_status,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.user_agent(), config.strict_status())
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Making trending request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Trending response status: {}", status);
        } else if self.strict_status {
            return Err(TrendingError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        } else {
            // 非 2xx 仍照常解析頁面內容
            tracing::warn!("Trending response status {} for {}, extracting anyway", status, url);
        }

        Ok(response.text().await?)
    }
}
