pub mod toml_config;

use crate::adapters::places_client::{DEFAULT_API_KEY_ENV, DEFAULT_PLACES_BASE_URL};
use crate::core::ConfigProvider;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

/// 單次上游呼叫的逾時上限（秒）
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Parser)]
#[command(name = "pharmacy-finder")]
#[command(about = "HTTP service that looks up pharmacies near a postal code")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_PLACES_BASE_URL)]
    pub places_base_url: String,

    #[arg(long, default_value_t = 10, help = "Timeout for each Places API call")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_API_KEY_ENV, help = "Environment variable holding the Places API key")]
    pub api_key_env: String,

    #[arg(long, help = "Optional TOML file overriding the options above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ServerConfig {
    /// 若指定了 `--config`，以檔案內容覆蓋命令列的值
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            tracing::info!("Loading configuration file: {}", path.display());
            TomlConfig::from_file(&path)?.apply_to(&mut self);
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| FinderError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: format!("Invalid bind address: {}", e),
            })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        self.bind_address()?;
        validate_url("places_base_url", &self.places_base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validate_non_empty_string("api_key_env", &self.api_key_env)?;
        Ok(())
    }
}

impl ConfigProvider for ServerConfig {
    fn places_base_url(&self) -> &str {
        &self.places_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn api_key_env(&self) -> &str {
        &self.api_key_env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        ServerConfig::parse_from(std::iter::once("pharmacy-finder").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.places_base_url, DEFAULT_PLACES_BASE_URL);
        assert_eq!(config.api_key_env, "GOOGLE_PLACES_API_KEY");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_cli_overrides() {
        let config = parse(&[
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--timeout-seconds",
            "3",
            "--api-key-env",
            "MY_PLACES_KEY",
        ]);

        assert_eq!(config.bind_address().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.api_key_env(), "MY_PLACES_KEY");
    }

    #[test]
    fn test_validation_failures() {
        assert!(parse(&["--timeout-seconds", "0"]).validate().is_err());
        assert!(parse(&["--places-base-url", "not a url"]).validate().is_err());
        assert!(parse(&["--host", "not a host"]).validate().is_err());
        assert!(parse(&["--api-key-env", " "]).validate().is_err());
    }
}
