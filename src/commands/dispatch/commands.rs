//! Command implementations for all vaultchat commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use vaultchat_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search { query, mode } => {
                let assistant = ctx.assistant()?;
                commands::search::execute(ctx.cli, &assistant, query, *mode)
            }
            Commands::Ask {
                question,
                context,
                mode,
            } => {
                let assistant = ctx.assistant()?;
                commands::ask::execute(
                    ctx.cli,
                    &assistant,
                    question,
                    context.as_deref().unwrap_or(""),
                    *mode,
                )
            }
            Commands::Config(subcmd) => commands::config::execute(ctx.cli, subcmd),
        }
    }
}
