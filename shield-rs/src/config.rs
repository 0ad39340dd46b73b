//! Configuration for shield-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ShieldError};
use crate::scoring::DEFAULT_SCAM_THRESHOLD;

/// Main analyzer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShieldConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Analyzer configuration
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// Remote endpoint configuration (client side)
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address for the analyze API (e.g., "0.0.0.0:8787")
    pub listen_addr: String,
}

/// Analyzer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Score at or above which a text is labeled a likely scam
    #[serde(default = "default_scam_threshold")]
    pub scam_threshold: i64,
}

/// Remote endpoint configuration, used by the fallback client and the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL of the analyze endpoint (e.g., "http://127.0.0.1:8787")
    pub base_url: Option<String>,
    /// Bound on the remote round-trip before falling back locally
    #[serde(default = "default_remote_timeout")]
    pub timeout_seconds: u64,
}

fn default_scam_threshold() -> i64 {
    DEFAULT_SCAM_THRESHOLD
}

fn default_remote_timeout() -> u64 {
    6
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scam_threshold: default_scam_threshold(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: default_remote_timeout(),
        }
    }
}

impl ShieldConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShieldError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ShieldError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8787".to_string(),
            },
            analyzer: AnalyzerConfig::default(),
            remote: RemoteConfig {
                base_url: Some("http://127.0.0.1:8787".to_string()),
                timeout_seconds: default_remote_timeout(),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| {
                ShieldError::Config(format!(
                    "Invalid listen address '{}': {}",
                    self.server.listen_addr, e
                ))
            })?;

        if !(0..=100).contains(&self.analyzer.scam_threshold) {
            return Err(ShieldError::Config(format!(
                "scam_threshold must be in 0..=100, got {}",
                self.analyzer.scam_threshold
            )));
        }

        if let Some(base_url) = &self.remote.base_url {
            url::Url::parse(base_url).map_err(|e| {
                ShieldError::Config(format!("Invalid remote base URL '{}': {}", base_url, e))
            })?;
        }

        Ok(())
    }
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShieldConfig::default();
        assert_eq!(config.analyzer.scam_threshold, 45);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
listen_addr = "0.0.0.0:8787"

[analyzer]
scam_threshold = 50
"#;
        let config: ShieldConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8787");
        assert_eq!(config.analyzer.scam_threshold, 50);
        assert_eq!(config.remote.timeout_seconds, 6);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = ShieldConfig::development();
        config.analyzer.scam_threshold = 150;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_remote_url() {
        let mut config = ShieldConfig::development();
        config.remote.base_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nlisten_addr = \"127.0.0.1:9000\"\n"
        )
        .unwrap();

        let config = ShieldConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.analyzer.scam_threshold, 45);
    }
}
