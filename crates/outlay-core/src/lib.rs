//! # Outlay Core
//!
//! Core library for Outlay - a flat-file personal expense ledger.
//!
//! This crate provides the record model, CSV persistence, input validation,
//! and the query/mutation logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **expense**: The `Expense` record and its draft/update builders
//! - **storage**: The `ExpenseStore` trait and CSV-backed implementation
//! - **validate**: Boundary validators turning raw text into typed fields
//! - **query**: Pure filters, search, and aggregation over loaded records
//! - **ledger**: Pure mutators (add, delete, edit) over loaded records
//!
//! ## Model
//!
//! Every operation is a fresh `load()` over the whole backing file, a pure
//! transform in memory, and (for mutations) a whole-file `save()`. There is
//! no cached index and no partial write path.

pub mod error;
pub mod expense;
pub mod ledger;
pub mod query;
pub mod storage;
pub mod validate;

pub use error::{LedgerError, Result};
pub use expense::{Expense, ExpenseDraft, ExpenseUpdate};
pub use storage::{CsvStore, ExpenseStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
