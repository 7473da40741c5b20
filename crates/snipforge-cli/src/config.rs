//! Optional file configuration
//!
//! `snipforge.toml` in the working directory supplies server defaults;
//! command-line flags take precedence, built-in defaults fill the rest.

use std::path::Path;

use serde::Deserialize;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "snipforge.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Bind host for `serve`
    pub host: Option<String>,
    /// Bind port for `serve`
    pub port: Option<u16>,
    /// OpenRouter attribution URL (same as SNIPFORGE_APP_URL)
    pub app_url: Option<String>,
}

/// Load the config file if it exists; a missing file is an empty config
pub fn load(path: &Path) -> Result<FileConfig, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let config = toml::from_str(&raw)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_config() {
        let config = load(Path::new("definitely/not/here.toml")).unwrap();
        assert!(config.host.is_none());
        assert!(config.port.is_none());
    }

    #[test]
    fn test_parses_partial_config() {
        let config: FileConfig = toml::from_str("port = 9090").unwrap();
        assert_eq!(config.port, Some(9090));
        assert!(config.host.is_none());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result: Result<FileConfig, _> = toml::from_str("port = [nope");
        assert!(result.is_err());
    }
}
