//! Pure mutators over a loaded record collection.
//!
//! Each function consumes the collection and returns the updated one; the
//! caller decides when to persist. A missing id is never an error here:
//! `delete` and `edit` simply return the collection unchanged, and the
//! caller can compare lengths or contents to detect the no-op.

use crate::expense::{Expense, ExpenseDraft, ExpenseUpdate};

/// Next identifier to assign: one past the highest in use, or 1 for an
/// empty ledger.
pub fn next_id(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
}

/// Append a new expense built from a validated draft.
///
/// Assigns the id, trims the description, and returns both the updated
/// collection and a copy of the created record.
pub fn add(mut expenses: Vec<Expense>, draft: ExpenseDraft) -> (Vec<Expense>, Expense) {
    let created = Expense {
        id: next_id(&expenses),
        date: draft.date,
        amount: draft.amount,
        category: draft.category,
        description: draft.description.trim().to_string(),
    };
    expenses.push(created.clone());
    (expenses, created)
}

/// Remove the expense with the given id, if present.
pub fn delete(mut expenses: Vec<Expense>, id: u64) -> Vec<Expense> {
    expenses.retain(|e| e.id != id);
    expenses
}

/// Apply a partial update to the expense with the given id, if present.
///
/// Only fields set on the update are replaced. An empty description is
/// treated as "leave untouched" rather than as a request to clear it.
pub fn edit(mut expenses: Vec<Expense>, id: u64, update: &ExpenseUpdate) -> Vec<Expense> {
    if let Some(expense) = expenses.iter_mut().find(|e| e.id == id) {
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(ref category) = update.category {
            expense.category = category.clone();
        }
        if let Some(ref description) = update.description {
            let trimmed = description.trim();
            if !trimmed.is_empty() {
                expense.description = trimmed.to_string();
            }
        }
    }
    expenses
}
