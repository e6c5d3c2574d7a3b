//! UI helpers for the Outlay CLI.

pub mod format;
