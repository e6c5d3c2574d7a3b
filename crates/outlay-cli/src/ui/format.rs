//! String formatting utilities for display.

use rust_decimal::Decimal;

/// Render an amount with exactly two decimal digits.
pub fn format_amount(amount: Decimal) -> String {
    let mut normalized = amount;
    normalized.rescale(2);
    normalized.to_string()
}

/// Truncate a string to max length, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_pads_decimals() {
        assert_eq!(format_amount(Decimal::new(125, 1)), "12.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(Decimal::new(1850, 2)), "18.50");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }
}
