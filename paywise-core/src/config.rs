//! Configuration management
//!
//! Settings are stored in settings.json next to the app data, matching the
//! desktop app format:
//! ```json
//! {
//!   "account": { "holderName": "Alex", "startingBalance": "2847.50" },
//!   "security": { "pinDigest": "..." },
//!   "app": { "demoMode": true }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    account: AccountSettings,
    #[serde(default)]
    security: SecuritySettings,
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountSettings {
    #[serde(default = "default_holder_name")]
    holder_name: String,
    #[serde(default)]
    starting_balance: Option<Decimal>,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            holder_name: default_holder_name(),
            starting_balance: None,
        }
    }
}

fn default_holder_name() -> String {
    "Alex".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecuritySettings {
    /// Hex SHA-256 digest of the enrolled PIN
    #[serde(default)]
    pin_digest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_demo_mode")]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            demo_mode: default_demo_mode(),
            other: HashMap::new(),
        }
    }
}

fn default_demo_mode() -> bool {
    true
}

/// PayWise configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub holder_name: String,
    pub starting_balance: Option<Decimal>,
    pub pin_digest: Option<String>,
    pub demo_mode: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            holder_name: default_holder_name(),
            starting_balance: None,
            pin_digest: None,
            demo_mode: true,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the paywise directory
    ///
    /// Demo mode can be overridden via the PAYWISE_DEMO_MODE environment
    /// variable (for CI/testing).
    pub fn load(paywise_dir: &Path) -> Result<Self> {
        let settings_path = paywise_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("PAYWISE_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            holder_name: raw.account.holder_name.clone(),
            starting_balance: raw.account.starting_balance,
            pin_digest: raw.security.pin_digest.clone(),
            demo_mode,
            _raw_settings: raw,
        })
    }

    /// Save config to the paywise directory
    /// Preserves settings fields this view doesn't manage
    pub fn save(&self, paywise_dir: &Path) -> Result<()> {
        let settings_path = paywise_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.account.holder_name = self.holder_name.clone();
        settings.account.starting_balance = self.starting_balance;
        settings.security.pin_digest = self.pin_digest.clone();
        settings.app.demo_mode = self.demo_mode;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.holder_name, "Alex");
        assert!(config.demo_mode);
        assert!(config.pin_digest.is_none());
        assert!(config.starting_balance.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.holder_name = "Jamie".to_string();
        config.starting_balance = Some(Decimal::new(50000, 2));
        config.pin_digest = Some("ab".repeat(32));
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.holder_name, "Jamie");
        assert_eq!(reloaded.starting_balance, Some(Decimal::new(50000, 2)));
        assert_eq!(reloaded.pin_digest, Some("ab".repeat(32)));
    }

    #[test]
    fn test_malformed_settings_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.holder_name, "Alex");
    }
}
