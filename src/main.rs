use anyhow::Context;
use clap::Parser;
use people_in_space::core::ConfigProvider;
use people_in_space::utils::{logger, validation::Validate};
use people_in_space::{serve, AppState, CliArgs, UpstreamClient};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match CliArgs::parse().resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting people-in-space service");
    if config.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = UpstreamClient::from_config(&config)?;
    tracing::info!("Upstream endpoint: {}", client.url());

    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    serve(listener, AppState::from_source(client)).await?;

    Ok(())
}
