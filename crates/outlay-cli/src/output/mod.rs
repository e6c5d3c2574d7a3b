//! Output formatting helpers for the CLI.
//!
//! Listing commands render in one of three ways: a table (default), plain
//! line-per-record text, or JSON via the `--json` flag.

mod json;
mod text;

// Re-export public API
pub use json::{expense_json, expenses_json, summary_json};
pub use text::{print_expense, print_expense_list, print_summary};

/// Human-readable output mode (JSON is a separate flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Plain,
}

/// Parse a `--format` value; `None` means the default table mode.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<OutputMode> {
    match value {
        None => Ok(OutputMode::Table),
        Some("table") => Ok(OutputMode::Table),
        Some("plain") => Ok(OutputMode::Plain),
        Some(other) => Err(anyhow::anyhow!(
            "Invalid format \"{}\" (use table or plain)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), OutputMode::Table);
        assert_eq!(parse_output_format(Some("table")).unwrap(), OutputMode::Table);
        assert_eq!(parse_output_format(Some("plain")).unwrap(), OutputMode::Plain);
        assert!(parse_output_format(Some("yaml")).is_err());
    }
}
