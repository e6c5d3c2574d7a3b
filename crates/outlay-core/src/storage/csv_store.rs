//! CSV-backed expense store.
//!
//! One row per expense, header `id,date,amount,category,description`,
//! UTF-8, comma-delimited with quoting handled by the `csv` crate. Every
//! save rewrites the file in full; the write goes to a sibling temp file
//! first and is renamed into place so a caller never observes a partial
//! file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;
use crate::expense::Expense;
use crate::storage::traits::ExpenseStore;

/// Default backing file name, resolved against the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "expenses.csv";

const HEADER: [&str; 5] = ["id", "date", "amount", "category", "description"];

/// Flat-file store holding the whole ledger in one CSV.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a header-only file if nothing exists at the path yet.
    pub fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.ensure_parent_dir()?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "ledger".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_all(&self, target: &Path, expenses: &[Expense]) -> Result<()> {
        // Header is written explicitly so an empty collection still
        // produces a well-formed file.
        let mut writer = WriterBuilder::new().has_headers(false).from_path(target)?;
        writer.write_record(HEADER)?;
        for expense in expenses {
            writer.serialize(expense)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ExpenseStore for CsvStore {
    fn load(&self) -> Result<Vec<Expense>> {
        self.ensure_file()?;

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let id_column = headers.iter().position(|name| name == "id");

        let mut expenses = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Rows without an identifier are skipped, not fatal. Everything
            // else on disk is trusted as already validated.
            let has_id = id_column
                .and_then(|idx| record.get(idx))
                .is_some_and(|value| !value.trim().is_empty());
            if !has_id {
                continue;
            }
            expenses.push(record.deserialize(Some(&headers))?);
        }
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        self.ensure_parent_dir()?;
        let temp = self.temp_path();
        self.write_all(&temp, expenses)?;
        rename_with_fallback(&temp, &self.path)?;
        Ok(())
    }
}

/// Rename the temp file into place, replacing the destination.
///
/// Some platforms (notably Windows) refuse to rename over an existing
/// file; remove the destination and retry once, cleaning up the temp file
/// if the retry fails too.
fn rename_with_fallback(temp: &Path, destination: &Path) -> io::Result<()> {
    if fs::rename(temp, destination).is_ok() {
        return Ok(());
    }
    let _ = fs::remove_file(destination);
    fs::rename(temp, destination).map_err(|err| {
        let _ = fs::remove_file(temp);
        err
    })
}
