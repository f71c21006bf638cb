use clap::Parser;
use pharmacy_finder::utils::{logger, validation::Validate};
use pharmacy_finder::{PharmacyServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ServerConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting pharmacy-finder");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Server config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if std::env::var(&config.api_key_env).is_err() {
        tracing::warn!(
            "{} is not set; every lookup will fail until it is",
            config.api_key_env
        );
    }

    let server = PharmacyServer::build(config)?;
    server.run().await?;

    Ok(())
}
