//! Show command handler.

use outlay_core::storage::ExpenseStore;
use outlay_core::LedgerError;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{expense_json, print_expense};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = store.load()?;
    let expense = expenses
        .iter()
        .find(|e| e.id == args.id)
        .ok_or(LedgerError::NotFound(args.id))?;

    if args.json {
        println!("{}", expense_json(expense)?);
    } else {
        print_expense(expense);
    }
    Ok(())
}
