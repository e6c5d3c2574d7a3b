//! Init command handler.

use std::path::PathBuf;

use outlay_core::storage::DEFAULT_LEDGER_FILE;
use outlay_core::CsvStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, OutlayConfig};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let target = args
        .path
        .clone()
        .or_else(|| ctx.cli().ledger.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));

    if target.exists() {
        return Err(anyhow::anyhow!(
            "There is already a ledger at {}",
            target.display()
        ));
    }

    let store = CsvStore::new(target.clone());
    store.ensure_file()?;

    let config_path = resolve_config_path()?;
    write_config(&config_path, &OutlayConfig::new(&target))?;

    if !ctx.quiet() {
        println!("Initialized empty ledger at {}", target.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
