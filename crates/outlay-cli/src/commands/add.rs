//! Add command handler.

use outlay_core::storage::ExpenseStore;
use outlay_core::{ledger, validate, ExpenseDraft};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::ui::format::format_amount;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let date = validate::validate_date(&args.date)?;
    let amount = validate::validate_amount(&args.amount)?;
    let category = validate::validate_category(&args.category)?;
    let draft = ExpenseDraft::new(date, amount, category).with_description(args.description.clone());

    let store = ctx.open_store()?;
    let expenses = store.load()?;
    let (expenses, created) = ledger::add(expenses, draft);
    store.save(&expenses)?;

    if !ctx.quiet() {
        println!(
            "Added expense {}: {} {} {} {}",
            created.id,
            created.date,
            format_amount(created.amount),
            created.category,
            created.description
        );
    }
    Ok(())
}
