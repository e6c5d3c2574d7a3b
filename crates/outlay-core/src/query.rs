//! Pure queries over a loaded record collection.
//!
//! Nothing here touches storage or mutates its input; every function takes
//! the full in-memory collection and derives a new collection or scalar.
//! Input order is preserved by all filters.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::expense::Expense;

/// Bucket label for records whose category is blank on disk.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Records dated within `[start, end]`, inclusive on both ends.
///
/// Dates are compared as typed calendar dates, which matches the ordering
/// of their fixed-width ISO text form.
pub fn filter_by_date_range(
    expenses: &[Expense],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Expense>> {
    if start > end {
        return Err(LedgerError::InvalidRange { start, end });
    }
    Ok(expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect())
}

/// Records whose category equals the query, case-insensitively.
///
/// The query is trimmed first; stored categories are already trimmed.
pub fn filter_by_category(expenses: &[Expense], category: &str) -> Vec<Expense> {
    let wanted = category.trim().to_lowercase();
    expenses
        .iter()
        .filter(|e| e.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Records whose category or description contains the query as a
/// case-insensitive substring. An empty query matches everything.
pub fn search(expenses: &[Expense], text: &str) -> Vec<Expense> {
    let needle = text.to_lowercase();
    expenses
        .iter()
        .filter(|e| {
            e.category.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Total amount per category, normalized back to two decimals.
///
/// Blank categories are bucketed under [`UNCATEGORIZED`]. The `BTreeMap`
/// keeps labels sorted, so rendering the result is deterministic.
pub fn summary_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in expenses {
        let label = if expense.category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            expense.category.clone()
        };
        *totals.entry(label).or_insert(Decimal::ZERO) += expense.amount;
    }
    for total in totals.values_mut() {
        total.rescale(2);
    }
    totals
}

/// Sum of all amounts, normalized to two decimals.
pub fn overall_total(expenses: &[Expense]) -> Decimal {
    let mut total: Decimal = expenses.iter().map(|e| e.amount).sum();
    total.rescale(2);
    total
}
