//! Boundary validators turning raw user input into typed field values.
//!
//! These are the only place where untrusted text becomes a date, amount,
//! or category. The store and query engine never re-validate; data already
//! on disk is trusted (see the load tolerance policy in `storage`).

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LedgerError, Result};

/// Parse a calendar date in strict `YYYY-MM-DD` form.
///
/// The 4-2-2 digit shape is enforced before chrono gets to see the text,
/// so inputs like `2025-1-5` or `05/01/2025` are rejected outright.
pub fn validate_date(input: &str) -> Result<NaiveDate> {
    let text = input.trim();
    if !has_iso_shape(text) {
        return Err(LedgerError::InvalidFormat(format!(
            "Invalid date \"{}\" (expected YYYY-MM-DD, e.g. 2025-10-24)",
            input.trim()
        )));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        LedgerError::InvalidFormat(format!("\"{}\" is not a real calendar date", text))
    })
}

fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Parse a non-negative amount and normalize it to cents.
///
/// The value is rounded half-up at the two-decimal boundary and rescaled
/// so it always carries exactly two fractional digits.
pub fn validate_amount(input: &str) -> Result<Decimal> {
    let text = input.trim();
    let parsed: Decimal = text.parse().map_err(|_| {
        LedgerError::InvalidFormat(format!("Invalid amount \"{}\" (expected a number)", text))
    })?;
    if parsed < Decimal::ZERO {
        return Err(LedgerError::NegativeValue(parsed));
    }
    let mut amount = parsed.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    if amount.is_zero() {
        // "-0" parses as non-negative but would render with a sign
        amount.set_sign_positive(true);
    }
    Ok(amount)
}

/// Trim a category label, rejecting blank input. Casing is preserved.
pub fn validate_category(input: &str) -> Result<String> {
    let category = input.trim();
    if category.is_empty() {
        return Err(LedgerError::EmptyValue("Category"));
    }
    Ok(category.to_string())
}
