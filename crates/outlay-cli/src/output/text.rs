//! Text and table output formatting for expenses.

use std::collections::BTreeMap;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};
use rust_decimal::Decimal;

use outlay_core::Expense;

use crate::output::OutputMode;
use crate::ui::format::{format_amount, truncate};

const DESCRIPTION_WIDTH: usize = 40;

/// Print a list of expenses in the requested mode.
pub fn print_expense_list(expenses: &[Expense], mode: OutputMode) {
    if expenses.is_empty() {
        println!("(no expenses)");
        return;
    }
    match mode {
        OutputMode::Table => print_table(expenses),
        OutputMode::Plain => print_plain(expenses),
    }
}

fn print_table(expenses: &[Expense]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["ID", "Date", "Amount", "Category", "Description"]);
    for expense in expenses {
        table.add_row([
            Cell::new(expense.id),
            Cell::new(expense.date),
            Cell::new(format_amount(expense.amount)).set_alignment(CellAlignment::Right),
            Cell::new(&expense.category),
            Cell::new(truncate(&expense.description, DESCRIPTION_WIDTH)),
        ]);
    }
    println!("{table}");
}

fn print_plain(expenses: &[Expense]) {
    for expense in expenses {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            expense.id,
            expense.date,
            format_amount(expense.amount),
            expense.category,
            expense.description
        );
    }
}

/// Print one expense as key/value lines.
pub fn print_expense(expense: &Expense) {
    println!("ID:          {}", expense.id);
    println!("Date:        {}", expense.date);
    println!("Amount:      {}", format_amount(expense.amount));
    println!("Category:    {}", expense.category);
    println!("Description: {}", expense.description);
}

/// Print per-category totals (already sorted by label) and the overall sum.
pub fn print_summary(totals: &BTreeMap<String, Decimal>, overall: Decimal) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Category", "Total"]);
    for (category, total) in totals {
        table.add_row([
            Cell::new(category),
            Cell::new(format_amount(*total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row([
        Cell::new("Overall"),
        Cell::new(format_amount(overall)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}
