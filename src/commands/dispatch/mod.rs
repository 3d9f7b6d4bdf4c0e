//! Command dispatch logic for vaultchat

use std::time::Instant;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use tracing::debug;
use vaultchat_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use macros::trace_command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let vault_path = resolve_vault_path(cli.vault.clone());

    debug!(elapsed = ?start.elapsed(), vault = %vault_path.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &vault_path, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
