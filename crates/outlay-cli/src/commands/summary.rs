//! Summary command handler.

use outlay_core::query;
use outlay_core::storage::ExpenseStore;

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::{print_summary, summary_json};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = store.load()?;

    let totals = query::summary_by_category(&expenses);
    let overall = query::overall_total(&expenses);

    if args.json {
        println!("{}", summary_json(&totals, overall)?);
    } else {
        print_summary(&totals, overall);
    }
    Ok(())
}
