//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use outlay_core::VERSION;

/// Outlay - a flat-file personal expense ledger
#[derive(Parser)]
#[command(name = "outlay")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger CSV file
    #[arg(short, long, global = true, env = "OUTLAY_LEDGER")]
    pub ledger: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty ledger file and point the config at it
    Init(InitArgs),

    /// Record a new expense
    Add(AddArgs),

    /// List expenses, optionally filtered by date range or category
    List(ListArgs),

    /// Search expenses by text in category or description
    Search(SearchArgs),

    /// Show a single expense by id
    Show(ShowArgs),

    /// Per-category totals and the overall total
    Summary(SummaryArgs),

    /// Delete an expense by id
    Delete(DeleteArgs),

    /// Edit fields of an existing expense
    Edit(EditArgs),

    /// Export the full ledger as JSON
    Export(ExportArgs),

    /// Check the ledger file for inconsistencies
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where the ledger file will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Amount (non-negative, rounded to cents)
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: String,

    /// Category label
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Free-form description
    #[arg(value_name = "DESCRIPTION", default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Only this category (case-insensitive)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in category or description
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Expense id
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Expense id
    #[arg(value_name = "ID")]
    pub id: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Expense id
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// New amount
    #[arg(long, value_name = "AMOUNT")]
    pub amount: Option<String>,

    /// New category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// New description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
