//! Configuration for the transparency dashboard CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use shared::CONFIG;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from config.toml. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub wallet: Option<WalletConfig>,
    #[serde(default)]
    pub indexer: Option<IndexerConfig>,
}

/// Wallet whose gating-token balance sets the access tier
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexerConfig {
    pub base_url: Option<String>,
    pub asset_id: Option<u64>,
    pub poll_interval_secs: Option<u64>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load if present; a missing file means defaults
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Values supplied on the command line, taking precedence over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Wallet to poll; `None` means no balance lookup
    pub wallet_address: Option<String>,
    pub indexer_url: String,
    pub asset_id: u64,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Merge CLI overrides, then the file, then `shared::CONFIG` defaults
    pub fn from_file(file_config: Option<&FileConfig>, overrides: Overrides) -> Self {
        let indexer = file_config.and_then(|f| f.indexer.clone()).unwrap_or_default();
        let file_address = file_config.and_then(|f| f.wallet.as_ref()).map(|w| w.address.clone());

        Self {
            wallet_address: overrides.address.or(file_address).filter(|a| !a.trim().is_empty()),

            indexer_url: overrides
                .base_url
                .or(indexer.base_url)
                .unwrap_or_else(|| CONFIG.indexer.base_url.to_string()),

            asset_id: indexer.asset_id.unwrap_or(CONFIG.gating.asset_id),

            poll_interval: Duration::from_secs(
                indexer
                    .poll_interval_secs
                    .unwrap_or(CONFIG.indexer.poll_interval_secs)
                    .max(1),
            ),

            request_timeout: Duration::from_secs(CONFIG.indexer.request_timeout_secs),
        }
    }

    pub fn defaults() -> Self {
        Self::from_file(None, Overrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_shared_config() {
        let config = Config::defaults();
        assert_eq!(config.wallet_address, None);
        assert_eq!(config.indexer_url, CONFIG.indexer.base_url);
        assert_eq!(config.asset_id, CONFIG.gating.asset_id);
        assert_eq!(config.poll_interval, Duration::from_secs(CONFIG.indexer.poll_interval_secs));
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[wallet]
address = "WALLETADDRESS"

[indexer]
base_url = "http://localhost:8980"
asset_id = 42
poll_interval_secs = 5
"#
        )
        .unwrap();

        let file_config = FileConfig::load(file.path()).unwrap();
        let config = Config::from_file(Some(&file_config), Overrides::default());
        assert_eq!(config.wallet_address.as_deref(), Some("WALLETADDRESS"));
        assert_eq!(config.indexer_url, "http://localhost:8980");
        assert_eq!(config.asset_id, 42);
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_falls_back() {
        let file_config: FileConfig = toml::from_str("[indexer]\npoll_interval_secs = 0\n").unwrap();
        let config = Config::from_file(Some(&file_config), Overrides::default());
        assert_eq!(config.indexer_url, CONFIG.indexer.base_url);
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.wallet_address, None);
    }

    #[test]
    fn test_overrides_win() {
        let file_config: FileConfig = toml::from_str("[wallet]\naddress = \"FROMFILE\"\n").unwrap();
        let overrides = Overrides {
            address: Some("FROMCLI".to_string()),
            base_url: Some("http://idx".to_string()),
        };
        let config = Config::from_file(Some(&file_config), overrides);
        assert_eq!(config.wallet_address.as_deref(), Some("FROMCLI"));
        assert_eq!(config.indexer_url, "http://idx");
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FileConfig::load_optional(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[wallet\naddress = ").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
