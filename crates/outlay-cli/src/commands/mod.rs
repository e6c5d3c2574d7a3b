//! Command handlers, one module per subcommand.

mod add;
mod check;
mod delete;
mod edit;
mod export;
mod init;
mod list;
mod misc;
mod search;
mod show;
mod summary;

use crate::app::AppContext;
use crate::cli::Commands;

pub fn dispatch(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Add(args) => add::handle_add(ctx, args),
        Commands::List(args) => list::handle_list(ctx, args),
        Commands::Search(args) => search::handle_search(ctx, args),
        Commands::Show(args) => show::handle_show(ctx, args),
        Commands::Summary(args) => summary::handle_summary(ctx, args),
        Commands::Delete(args) => delete::handle_delete(ctx, args),
        Commands::Edit(args) => edit::handle_edit(ctx, args),
        Commands::Export(args) => export::handle_export(ctx, args),
        Commands::Check => check::handle_check(ctx),
        Commands::Completions(args) => misc::handle_completions(args),
    }
}
