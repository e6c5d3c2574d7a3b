//! Check command handler: integrity pass over the raw ledger file.
//!
//! Unlike `load`, which trusts rows that carry an identifier, this walks
//! every row and field and reports anything a well-formed ledger should
//! not contain.

use std::collections::HashSet;

use csv::ReaderBuilder;

use outlay_core::validate;

use crate::app::AppContext;

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.ledger_path()?;
    if !path.exists() {
        return Err(anyhow::anyhow!("No ledger file at {}", path.display()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let expected = ["id", "date", "amount", "category", "description"];
    let mut problems: Vec<String> = Vec::new();
    if headers.iter().ne(expected) {
        problems.push(format!(
            "header is [{}], expected [{}]",
            headers.iter().collect::<Vec<_>>().join(","),
            expected.join(",")
        ));
    }

    let column = |name: &str| headers.iter().position(|h| h == name);
    let columns = (
        column("id"),
        column("date"),
        column("amount"),
        column("category"),
    );

    let mut seen_ids: HashSet<u64> = HashSet::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 2; // 1-based, after the header line
        let record = record?;
        let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

        let id_text = field(columns.0).trim();
        if id_text.is_empty() {
            problems.push(format!("row {}: missing id (row is ignored by load)", row));
            continue;
        }
        match id_text.parse::<u64>() {
            Ok(id) => {
                if !seen_ids.insert(id) {
                    problems.push(format!("row {}: duplicate id {}", row, id));
                }
            }
            Err(_) => problems.push(format!("row {}: unparseable id \"{}\"", row, id_text)),
        }

        if let Err(err) = validate::validate_date(field(columns.1)) {
            problems.push(format!("row {}: {}", row, err));
        }
        if let Err(err) = validate::validate_amount(field(columns.2)) {
            problems.push(format!("row {}: {}", row, err));
        }
        if field(columns.3).trim().is_empty() {
            problems.push(format!("row {}: blank category", row));
        }
    }

    if problems.is_empty() {
        if !ctx.quiet() {
            println!("Ledger at {} looks good", path.display());
        }
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{problem}");
    }
    Err(anyhow::anyhow!("Found {} problem(s)", problems.len()))
}
