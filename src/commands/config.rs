//! `vaultchat config` command - manage the stored settings

use crate::cli::{Cli, ConfigCommands, OutputFormat};
use vaultchat_core::bail_validation;
use vaultchat_core::config::{Settings, PRICING_NOTE};
use vaultchat_core::error::Result;

/// Execute a config subcommand
pub fn execute(cli: &Cli, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::SetKey { key } => set_key(cli, key),
        ConfigCommands::ClearKey => clear_key(cli),
        ConfigCommands::Show => show(cli),
        ConfigCommands::Path => {
            println!("{}", Settings::config_path()?.display());
            Ok(())
        }
    }
}

fn set_key(cli: &Cli, key: &str) -> Result<()> {
    if key.trim().is_empty() {
        bail_validation!("Please enter an API key");
    }

    let mut settings = Settings::load()?;
    settings.set_api_key(key);
    settings.save()?;
    tracing::debug!("api_key_updated");

    if !cli.quiet {
        println!("API key saved to {}", Settings::source_display());
        println!("{}", PRICING_NOTE);
    }
    Ok(())
}

fn clear_key(cli: &Cli) -> Result<()> {
    let mut settings = Settings::load()?;
    settings.clear_api_key();
    settings.save()?;

    if !cli.quiet {
        println!("API key cleared");
    }
    Ok(())
}

fn show(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?.with_env_overrides();

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "api_key": settings.redacted_key(),
                "api_key_set": settings.has_api_key(),
                "endpoint": settings.endpoint,
                "timeout_seconds": settings.timeout_seconds,
                "source": Settings::source_display(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("api_key: {}", settings.redacted_key());
            println!("endpoint: {}", settings.endpoint);
            println!("timeout_seconds: {}", settings.timeout_seconds);
            println!("source: {}", Settings::source_display());
            if !cli.quiet {
                println!();
                println!("{}", PRICING_NOTE);
            }
        }
    }
    Ok(())
}
