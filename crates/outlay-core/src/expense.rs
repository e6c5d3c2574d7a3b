//! The expense record and its builder types.
//!
//! Field declaration order doubles as the on-disk column order
//! (`id,date,amount,category,description`), so it must not be reordered.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One expense entry.
///
/// Instances only come into existence through [`crate::ledger::add`] (which
/// assigns the id) or a store load; fields are already validated by the time
/// a record is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier, unique within one ledger file
    pub id: u64,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Non-negative amount in currency minor units (always two decimals)
    #[serde(with = "cents")]
    pub amount: Decimal,

    /// Non-empty category label, stored with original casing
    pub category: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

/// Validated input for a new expense, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

impl ExpenseDraft {
    pub fn new(date: NaiveDate, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial field set for [`crate::ledger::edit`].
///
/// Fields left as `None` are not touched on the target record. Values are
/// assumed to have passed through [`crate::validate`] already.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True if no field is set (the edit would be a guaranteed no-op).
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Serde adapter rendering amounts as fixed two-decimal strings.
///
/// Keeps the serialized form stable ("12.50", never "12.5") so the file
/// round-trips and stays diff-friendly.
mod cents {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut normalized = *amount;
        normalized.rescale(2);
        serializer.serialize_str(&normalized.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Decimal::from_str(text.trim()).map_err(serde::de::Error::custom)
    }
}
