//! Export command handler.

use std::fs;

use outlay_core::storage::ExpenseStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::output::expenses_json;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = store.load()?;
    let rendered = expenses_json(&expenses)?;

    match args.output {
        Some(ref path) => {
            fs::write(path, format!("{rendered}\n"))?;
            if !ctx.quiet() {
                println!("Exported {} expense(s) to {}", expenses.len(), path);
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
