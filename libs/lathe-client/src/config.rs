use serde::Deserialize;

use crate::error::ClientError;
use crate::model::SourceType;

/// Client configuration, parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8080`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Source type used when staging data.
    #[serde(default)]
    pub source_type: SourceType,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            source_type: SourceType::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ClientError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ClientError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ClientError> {
        toml::from_str(toml_str).map_err(|e| ClientError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let config = ClientConfig::parse("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.source_type, SourceType::Mysql);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"http://lathe:9000\"\ntimeout_secs = 5\nsource_type = \"LOCAL\""
        )
        .unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "http://lathe:9000");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.source_type, SourceType::Local);
    }

    #[test]
    fn bad_config_is_reported() {
        assert!(matches!(
            ClientConfig::parse("timeout_secs = \"soon\""),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::load("/nonexistent/lathe.toml"),
            Err(ClientError::Config(_))
        ));
    }
}
