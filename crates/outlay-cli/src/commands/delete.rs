//! Delete command handler.

use outlay_core::ledger;
use outlay_core::storage::ExpenseStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = store.load()?;

    let before = expenses.len();
    let expenses = ledger::delete(expenses, args.id);

    if expenses.len() == before {
        if !ctx.quiet() {
            println!("No expense with id {} (nothing deleted)", args.id);
        }
        return Ok(());
    }

    store.save(&expenses)?;
    if !ctx.quiet() {
        println!("Deleted expense {}", args.id);
    }
    Ok(())
}
