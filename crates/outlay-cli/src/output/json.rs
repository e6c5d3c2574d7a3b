//! JSON output formatting for expenses.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_json::json;

use outlay_core::Expense;

use crate::ui::format::format_amount;

/// One expense as pretty-printed JSON.
pub fn expense_json(expense: &Expense) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(expense)?)
}

/// A collection of expenses as a pretty-printed JSON array.
pub fn expenses_json(expenses: &[Expense]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

/// Summary totals as JSON, amounts rendered as two-decimal strings.
pub fn summary_json(totals: &BTreeMap<String, Decimal>, overall: Decimal) -> anyhow::Result<String> {
    let categories: serde_json::Map<String, serde_json::Value> = totals
        .iter()
        .map(|(category, total)| (category.clone(), json!(format_amount(*total))))
        .collect();
    let value = json!({
        "categories": categories,
        "overall": format_amount(overall),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_expense_json_shape() {
        let expense = Expense {
            id: 3,
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            amount: Decimal::new(550, 2),
            category: "Transport".to_string(),
            description: "bus".to_string(),
        };
        let rendered = expense_json(&expense).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["id"], 3);
        assert_eq!(parsed["date"], "2025-06-15");
        assert_eq!(parsed["amount"], "5.50");
    }

    #[test]
    fn test_summary_json_shape() {
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_string(), Decimal::new(1550, 2));
        let rendered = summary_json(&totals, Decimal::new(1550, 2)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["categories"]["Food"], "15.50");
        assert_eq!(parsed["overall"], "15.50");
    }
}
