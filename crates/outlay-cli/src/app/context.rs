//! Application context for the Outlay CLI.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use outlay_core::CsvStore;

use crate::cli::Cli;
use crate::config::{read_config, OutlayConfig};
use crate::output::{parse_output_format, OutputMode};

use super::resolver::{resolve_config_path, resolve_ledger_path};

/// Per-invocation context bundling CLI args with lazily-loaded config.
///
/// Loading may hit the config file, so it happens at most once per run
/// instead of being repeated in every handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<OutlayConfig>>,
    ledger_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            ledger_path: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file contents, if a config file exists.
    pub fn config(&self) -> anyhow::Result<Option<&OutlayConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// The resolved ledger file path.
    pub fn ledger_path(&self) -> anyhow::Result<&PathBuf> {
        self.ledger_path
            .get_or_try_init(|| Ok(resolve_ledger_path(self.cli, self.config()?)))
    }

    /// A store over the resolved ledger file.
    pub fn open_store(&self) -> anyhow::Result<CsvStore> {
        Ok(CsvStore::new(self.ledger_path()?.clone()))
    }

    /// Output mode for listing commands: `--format` flag first, then the
    /// config's `ui.format`, then the default table mode.
    pub fn output_format(&self, flag: Option<&str>) -> anyhow::Result<OutputMode> {
        if flag.is_some() {
            return parse_output_format(flag);
        }
        let configured = self.config()?.and_then(|c| c.ui.format.as_deref());
        parse_output_format(configured)
    }
}
