use crate::core::pipeline::TrendingPipeline;
use crate::core::{ConfigProvider, Logger, PageSource, Query, TrendingResponse};

/// Logs the incoming query, runs the search and wraps the result.
pub async fn handle<S, C>(
    pipeline: &TrendingPipeline<S, C>,
    query: Query,
    logger: &dyn Logger,
) -> TrendingResponse
where
    S: PageSource,
    C: ConfigProvider,
{
    let input = serde_json::to_string(&query).unwrap_or_else(|_| format!("{:?}", query));
    logger.info(&format!("The input is {}", input));

    TrendingResponse {
        repos: pipeline.search(&query).await,
    }
}
