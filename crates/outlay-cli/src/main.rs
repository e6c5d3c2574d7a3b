//! Outlay CLI - a flat-file personal expense ledger.
//!
//! This is the command-line interface for Outlay. Every subcommand is one
//! load → transform → save cycle over the core library; no state survives
//! between invocations.

mod app;
mod cli;
mod commands;
mod config;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = commands::dispatch(&ctx) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
