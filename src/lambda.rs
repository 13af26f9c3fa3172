use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use trending_scraper::utils::logger;
use trending_scraper::utils::validation::Validate;
use trending_scraper::{handle, LambdaConfig, Query, TracingLogger, TrendingPipeline, TrendingResponse};

async fn function_handler(event: LambdaEvent<Query>) -> Result<TrendingResponse, Error> {
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let pipeline = TrendingPipeline::from_config(config)?;
    Ok(handle(&pipeline, event.payload, &TracingLogger).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
