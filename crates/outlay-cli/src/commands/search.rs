//! Search command handler.

use outlay_core::query;
use outlay_core::storage::ExpenseStore;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{expenses_json, print_expense_list};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = store.load()?;
    let hits = query::search(&expenses, &args.query);

    if args.json {
        println!("{}", expenses_json(&hits)?);
    } else {
        print_expense_list(&hits, ctx.output_format(args.format.as_deref())?);
    }
    Ok(())
}
