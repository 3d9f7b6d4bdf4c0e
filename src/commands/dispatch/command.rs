//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use vaultchat_core::config::Settings;
use vaultchat_core::error::Result;
use vaultchat_core::qa::QaClient;
use vaultchat_core::session::Assistant;
use vaultchat_core::vault::FsVault;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub vault_path: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, vault_path: &'a PathBuf, start: Instant) -> Self {
        Self {
            cli,
            vault_path,
            start,
        }
    }

    /// Open the vault and build its metadata snapshot
    pub fn open_vault(&self) -> Result<FsVault> {
        let vault = FsVault::open(self.vault_path)?;
        trace_command!(self.cli, self.start, "open_vault");
        Ok(vault)
    }

    /// Settings as stored, with environment overrides applied
    pub fn effective_settings(&self) -> Result<Settings> {
        Ok(Settings::load()?.with_env_overrides())
    }

    /// Vault plus question-answering client, ready for a user action
    pub fn assistant(&self) -> Result<Assistant<FsVault>> {
        let settings = self.effective_settings()?;
        let vault = self.open_vault()?;
        Ok(Assistant::new(vault, QaClient::from_settings(&settings)))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("vaultchat {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Search your notes and ask questions about them.");
        println!();
        println!("Run `vaultchat --help` for usage information.");
        Ok(())
    }
}
