//! List command handler.

use chrono::NaiveDate;

use outlay_core::storage::ExpenseStore;
use outlay_core::{query, validate};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{expenses_json, print_expense_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut expenses = store.load()?;

    if args.since.is_some() || args.until.is_some() {
        // An open bound defaults to the far end of the calendar, so a lone
        // --since or --until still goes through the same inclusive filter.
        let start = match args.since {
            Some(ref s) => validate::validate_date(s)?,
            None => NaiveDate::MIN,
        };
        let end = match args.until {
            Some(ref u) => validate::validate_date(u)?,
            None => NaiveDate::MAX,
        };
        expenses = query::filter_by_date_range(&expenses, start, end)?;
    }

    if let Some(ref category) = args.category {
        expenses = query::filter_by_category(&expenses, category);
    }

    if args.json {
        println!("{}", expenses_json(&expenses)?);
    } else {
        print_expense_list(&expenses, ctx.output_format(args.format.as_deref())?);
    }
    Ok(())
}
