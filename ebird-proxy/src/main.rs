use clap::Parser;
use ebird_proxy::config;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// HTTP proxy for the eBird recent-observations API
#[derive(Parser)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ebird_proxy=info".into()),
        )
        .init();

    let config = config::load_from_file(&cli.config)?;
    ebird_proxy::run(config).await?;

    Ok(())
}
