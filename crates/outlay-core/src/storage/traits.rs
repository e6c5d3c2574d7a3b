//! Store trait definition.
//!
//! The `ExpenseStore` trait defines the interface a backing store must
//! implement. The ledger follows a read-modify-write-whole-file model:
//! callers load the full collection, transform it in memory, and persist
//! the full collection back. There is no partial update path.

use crate::error::Result;
use crate::expense::Expense;

/// Whole-collection store interface for the expense ledger.
///
/// All implementations must ensure:
/// - `load` returns every well-formed record in file order
/// - `save` replaces the entire backing content in one call
/// - a `save` followed by a `load` reproduces the same logical values
///   (id, date, amount, category, description) for every record
///
/// Concurrent writers are not supported; two interleaved load/save cycles
/// race and the later save wins.
pub trait ExpenseStore {
    /// Load the full record collection.
    ///
    /// If the backing file does not exist yet, an empty, well-formed file
    /// is created and an empty collection is returned. Rows with a missing
    /// or blank identifier are skipped; everything else on disk is trusted
    /// as already validated.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the file cannot be read or a row
    /// with an identifier fails to parse.
    fn load(&self) -> Result<Vec<Expense>>;

    /// Persist the given collection, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the file cannot be written.
    fn save(&self, expenses: &[Expense]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_expense_store<T: ExpenseStore>(_store: T) {}
    }
}
