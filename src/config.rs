use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub model: Option<String>,
    pub chunk_size: Option<usize>,
    pub bind: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
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
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
model = "gemini-1.5-pro"
chunk_size = 8000
bind = "0.0.0.0:3000"
timeout_secs = 90
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.chunk_size, Some(8000));
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:3000"));
        assert_eq!(config.timeout_secs, Some(90));
    }

    #[test]
    fn test_parse_empty_config() {
        let toml_str = "";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.model.is_none());
        assert!(config.chunk_size.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"model = "gemini-2.0-flash""#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(config.bind.is_none());
    }
}
