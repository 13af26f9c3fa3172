use clap::Parser;
use trending_scraper::core::Storage;
use trending_scraper::utils::error::{ErrorSeverity, TrendingError};
use trending_scraper::utils::{logger, validation::Validate};
use trending_scraper::{handle, CliConfig, LocalStorage, TracingLogger, TrendingPipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting trending-scraper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ trending-scraper failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), TrendingError> {
    let settings = config.settings()?;
    settings.validate()?;

    let pipeline = TrendingPipeline::from_config(settings)?;
    let response = handle(&pipeline, config.query(), &TracingLogger).await;
    tracing::info!("✅ Found {} trending repositories", response.repos.len());

    let rendered = config.format.render(&response)?;

    match config.output_path() {
        Some(path) => {
            let dir = path
                .parent()
                .and_then(|p| p.to_str())
                .filter(|p| !p.is_empty())
                .unwrap_or(".");
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| TrendingError::InvalidConfigValueError {
                    field: "output".to_string(),
                    value: path.display().to_string(),
                    reason: "Output path has no file name".to_string(),
                })?;

            LocalStorage::new(dir.to_string())
                .write_file(file_name, rendered.as_bytes())
                .await?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
