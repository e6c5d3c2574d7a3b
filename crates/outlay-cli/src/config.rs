//! TOML config file handling.
//!
//! The config lives at `$XDG_CONFIG_HOME/outlay/config.toml` (falling back
//! to `~/.config/outlay/config.toml`) and records where the ledger file is,
//! plus UI defaults. `OUTLAY_CONFIG` overrides the location wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OutlayConfig {
    pub ledger: LedgerSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    /// Default output format for listing commands (table, plain)
    pub format: Option<String>,
}

impl OutlayConfig {
    pub fn new(ledger_path: &Path) -> Self {
        Self {
            ledger: LedgerSection {
                path: ledger_path.to_string_lossy().to_string(),
            },
            ui: UiSection::default(),
        }
    }
}

/// Default config path under the user's config directory.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var_os("HOME")
                .ok_or_else(|| anyhow::anyhow!("Cannot locate config dir: HOME is not set"))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(base.join("outlay").join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<OutlayConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Malformed config at {}", path.display()))
}

pub fn write_config(path: &Path, config: &OutlayConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create config dir {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Cannot serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Cannot write config at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("outlay").join("config.toml");

        let config = OutlayConfig::new(Path::new("/tmp/expenses.csv"));
        write_config(&config_path, &config).unwrap();

        let loaded = read_config(&config_path).unwrap();
        assert_eq!(loaded.ledger.path, "/tmp/expenses.csv");
        assert!(loaded.ui.format.is_none());
    }

    #[test]
    fn test_ui_section_is_optional() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[ledger]\npath = \"book.csv\"\n").unwrap();

        let loaded = read_config(&config_path).unwrap();
        assert_eq!(loaded.ledger.path, "book.csv");
    }
}
