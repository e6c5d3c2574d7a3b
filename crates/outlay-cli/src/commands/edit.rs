//! Edit command handler.

use outlay_core::storage::ExpenseStore;
use outlay_core::{ledger, validate, ExpenseUpdate};

use crate::app::AppContext;
use crate::cli::EditArgs;

/// Build the partial update from the provided flags.
///
/// A flag given as an empty string counts as "not provided", so
/// `--description ""` leaves the stored description untouched.
fn build_update(args: &EditArgs) -> anyhow::Result<ExpenseUpdate> {
    let mut update = ExpenseUpdate::new();
    if let Some(value) = nonblank(&args.date) {
        update = update.date(validate::validate_date(value)?);
    }
    if let Some(value) = nonblank(&args.amount) {
        update = update.amount(validate::validate_amount(value)?);
    }
    if let Some(value) = nonblank(&args.category) {
        update = update.category(validate::validate_category(value)?);
    }
    if let Some(value) = nonblank(&args.description) {
        update = update.description(value);
    }
    Ok(update)
}

fn nonblank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let update = build_update(args)?;
    if update.is_empty() {
        return Err(anyhow::anyhow!(
            "Nothing to change; pass at least one of --date, --amount, --category, --description"
        ));
    }

    let store = ctx.open_store()?;
    let expenses = store.load()?;

    let exists = expenses.iter().any(|e| e.id == args.id);
    if !exists {
        if !ctx.quiet() {
            println!("No expense with id {} (nothing changed)", args.id);
        }
        return Ok(());
    }

    let expenses = ledger::edit(expenses, args.id, &update);
    store.save(&expenses)?;
    if !ctx.quiet() {
        println!("Updated expense {}", args.id);
    }
    Ok(())
}
