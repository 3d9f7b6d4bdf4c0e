//! The `vaultchat` binary
//!
//! `vaultchat search` lists notes in a markdown vault whose name, tags or
//! block structure (or, with `--mode content`, whose text) match a query.
//! `vaultchat ask` sends a question to the question-answering API, together
//! with up to five matching notes when `--context` is given. `vaultchat
//! config` manages the stored API key.
//!
//! Errors go to stderr as `error: <message>`, or as a JSON envelope under
//! `--format json`; the process exit code follows the error kind.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use vaultchat_core::error::{ExitCode as VaultChatExitCode, VaultChatError};
use vaultchat_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json_errors() && !is_informational(&err) => {
            return report(OutputFormat::Json, &VaultChatError::validation(err.to_string()));
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(VaultChatExitCode::Success as u8),
        Err(e) => report(cli.format, &e),
    }
}

/// Print an error in the requested format and turn it into an exit code
fn report(format: OutputFormat, error: &VaultChatError) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human => eprintln!("error: {}", error),
    }
    ExitCode::from(error.exit_code() as u8)
}

/// `--help` and `--version` keep clap's own output
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

/// Whether argv asked for JSON output, checked before clap has parsed it
fn wants_json_errors() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
