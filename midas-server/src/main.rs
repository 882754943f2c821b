use clap::Parser;
use midas_server::cli::Args;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;
    midas_server::run(config).await.inspect_err(|e| {
        tracing::error!(error = %e, "midas-server failed");
    })?;
    Ok(())
}
