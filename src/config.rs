use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5020;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_API_LANG: &str = "en";

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Bind host for the HTTP server
    pub host: String,
    /// Bind port for the HTTP server
    pub port: u16,
    /// Timeout in seconds for outbound requests to YouTube
    pub request_timeout_secs: u64,
    /// Fixed caption language for the /transcript-api endpoint
    pub api_lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_lang: DEFAULT_API_LANG.to_string(),
        }
    }
}

impl Config {
    /// Load config from ~/.config/ytta/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytta")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
host = "127.0.0.1"
port = 8080
request_timeout_secs = 10
api_lang = "de"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.api_lang, "de");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_lang, "en");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"port = 9000"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, DEFAULT_HOST);
    }
}
