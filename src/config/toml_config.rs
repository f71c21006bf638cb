use crate::config::ServerConfig;
use crate::utils::error::{FinderError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// 設定檔格式：
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8080
///
/// [places]
/// base_url = "https://maps.googleapis.com/maps/api/place"
/// timeout_seconds = 5
/// api_key_env = "GOOGLE_PLACES_API_KEY"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub places: Option<PlacesSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub api_key_env: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLACES_BASE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FinderError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }

        if let Some(places) = &self.places {
            if let Some(base_url) = &places.base_url {
                config.places_base_url = base_url.clone();
            }
            if let Some(timeout_seconds) = places.timeout_seconds {
                config.timeout_seconds = timeout_seconds;
            }
            if let Some(api_key_env) = &places.api_key_env {
                config.api_key_env = api_key_env.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_env::init_test_env;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
port = 8080
"#,
        )
        .unwrap();

        assert_eq!(config.server.unwrap().port, Some(8080));
        assert!(config.places.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        init_test_env();

        let config = TomlConfig::from_toml_str(
            r#"
[places]
base_url = "${TOML_CONFIG_TEST_BASE_URL}"
api_key_env = "${TOML_CONFIG_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        let places = config.places.unwrap();
        assert_eq!(places.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(places.api_key_env.as_deref(), Some("${TOML_CONFIG_TEST_UNSET_VAR}"));
    }

    #[test]
    fn test_apply_overrides_only_present_fields() {
        let mut server_config = ServerConfig::parse_from(["pharmacy-finder", "--port", "7000"]);
        let file_config = TomlConfig::from_toml_str(
            r#"
[server]
host = "0.0.0.0"

[places]
timeout_seconds = 2
"#,
        )
        .unwrap();

        file_config.apply_to(&mut server_config);

        assert_eq!(server_config.host, "0.0.0.0");
        assert_eq!(server_config.port, 7000);
        assert_eq!(server_config.timeout_seconds, 2);
        assert_eq!(server_config.api_key_env, "GOOGLE_PLACES_API_KEY");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(TomlConfig::from_toml_str("[server\nport = ").is_err());
        assert!(TomlConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }
}
