//! Path resolution for config and ledger files.

use std::path::PathBuf;

use outlay_core::storage::DEFAULT_LEDGER_FILE;

use crate::cli::Cli;
use crate::config::{default_config_path, OutlayConfig};

/// Resolve the config file path, checking OUTLAY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("OUTLAY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the ledger file path.
///
/// Precedence: `--ledger` flag (or `OUTLAY_LEDGER`, which clap folds into
/// the same field), then the config file, then `expenses.csv` in the
/// working directory.
pub fn resolve_ledger_path(cli: &Cli, config: Option<&OutlayConfig>) -> PathBuf {
    if let Some(ref path) = cli.ledger {
        return PathBuf::from(path);
    }
    if let Some(config) = config {
        return PathBuf::from(&config.ledger.path);
    }
    PathBuf::from(DEFAULT_LEDGER_FILE)
}
