use crate::adapters::HttpPageSource;
use crate::core::extract::extract_repositories;
use crate::core::url::build_trending_url;
use crate::core::{ConfigProvider, PageSource, Query, RepositorySummary};
use crate::utils::error::Result;

/// Fetches the trending page for a query and extracts its repositories.
pub struct TrendingPipeline<S: PageSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<C: ConfigProvider> TrendingPipeline<HttpPageSource, C> {
    /// Pipeline backed by a real HTTP client built from `config`.
    pub fn from_config(config: C) -> Result<Self> {
        let source = HttpPageSource::from_config(&config)?;
        Ok(Self::new(source, config))
    }
}

impl<S: PageSource, C: ConfigProvider> TrendingPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn url_for(&self, query: &Query) -> String {
        build_trending_url(self.config.base_url(), query)
    }

    /// Fetch, parse and extract, surfacing the first failure.
    pub async fn try_search(&self, query: &Query) -> Result<Vec<RepositorySummary>> {
        let url = self.url_for(query);
        let body = self.source.fetch_page(&url).await?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        let repos = extract_repositories(&body, self.config.origin())?;
        tracing::debug!("Extracted {} repositories", repos.len());
        Ok(repos)
    }

    /// Like [`try_search`](Self::try_search) but never fails: errors are
    /// logged and an empty list is returned.
    pub async fn search(&self, query: &Query) -> Vec<RepositorySummary> {
        match self.try_search(query).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::error!(
                    "❌ Error fetching trending data: {} (Category: {:?})",
                    e,
                    e.category()
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScraperSettings;
    use crate::core::Since;
    use crate::utils::error::TrendingError;
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use std::sync::{Arc, Mutex};

    const FIXTURE: &str = include_str!("../../tests/fixtures/trending.html");

    /// 記錄請求網址的假頁面來源
    #[derive(Clone, Default)]
    struct MockSource {
        body: Option<String>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PageSource for MockSource {
        async fn fetch_page(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.body.clone().ok_or_else(|| TrendingError::ConfigError {
                message: "no page configured".to_string(),
            })
        }
    }

    fn settings_for(server: &MockServer) -> ScraperSettings {
        ScraperSettings {
            base_url: server.url("/trending"),
            ..ScraperSettings::default()
        }
    }

    #[tokio::test]
    async fn test_try_search_requests_built_url() {
        let source = MockSource {
            body: Some(FIXTURE.to_string()),
            ..Default::default()
        };
        let requested = source.requested.clone();
        let pipeline = TrendingPipeline::new(source, ScraperSettings::default());

        let query = Query::new(Some("python".to_string()), Some(Since::Weekly));
        let repos = pipeline.try_search(&query).await.unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(
            *requested.lock().unwrap(),
            vec!["https://github.com/trending/python?since=weekly".to_string()]
        );
    }

    #[tokio::test]
    async fn test_search_swallows_source_failure() {
        let pipeline = TrendingPipeline::new(MockSource::default(), ScraperSettings::default());
        let query = Query::default();

        assert!(matches!(
            pipeline.try_search(&query).await,
            Err(TrendingError::ConfigError { .. })
        ));
        assert!(pipeline.search(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_against_mock_server() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/trending/rust")
                .query_param("since", "daily");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(FIXTURE);
        });

        let pipeline = TrendingPipeline::from_config(settings_for(&server)).unwrap();
        let query = Query::new(Some("rust".to_string()), Some(Since::Daily));
        let repos = pipeline.search(&query).await;

        page_mock.assert();
        assert_eq!(repos.len(), 3);
        assert_eq!(repos[1].url, "https://github.com/python/cpython");
        assert_eq!(repos[1].stars, "58001");
        assert_eq!(repos[1].today_stars, 203);
    }

    #[tokio::test]
    async fn test_error_page_yields_no_repositories() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/trending");
            then.status(500).body("<html><body>Whoa there!</body></html>");
        });

        let pipeline = TrendingPipeline::from_config(settings_for(&server)).unwrap();
        let repos = pipeline.try_search(&Query::default()).await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_strict_status_surfaces_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/trending");
            then.status(500).body(FIXTURE);
        });

        let settings = ScraperSettings {
            strict_status: true,
            ..settings_for(&server)
        };
        let pipeline = TrendingPipeline::from_config(settings).unwrap();

        let result = pipeline.try_search(&Query::default()).await;
        assert!(matches!(
            result,
            Err(TrendingError::HttpStatus { status: 500, .. })
        ));
        assert!(pipeline.search(&Query::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let settings = ScraperSettings {
            base_url: "http://127.0.0.1:1/trending".to_string(),
            ..ScraperSettings::default()
        };
        let pipeline = TrendingPipeline::from_config(settings).unwrap();

        let result = pipeline.try_search(&Query::default()).await;
        assert!(matches!(result, Err(TrendingError::RequestError(_))));
        assert!(pipeline.search(&Query::default()).await.is_empty());
    }
}
