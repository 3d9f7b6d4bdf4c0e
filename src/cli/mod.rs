//! CLI argument parsing for vaultchat
//!
//! Global flags: --vault, --format, --quiet, --verbose, --log-level, --log-json

pub mod config;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use config::ConfigCommands;
pub use output::OutputFormat;
use output::parse_output_format;
use vaultchat_core::search::SearchMode;

/// Vaultchat - search your notes and ask questions about them
#[derive(Parser, Debug)]
#[command(name = "vaultchat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the current directory)
    #[arg(long, global = true, env = "VAULTCHAT_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or a full directive like `ureq=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search notes by name, tags and structure (or by content)
    Search {
        /// Search query (e.g. "#person", "painting")
        query: String,

        /// What to match against
        #[arg(long, short, default_value = "metadata", value_parser = parse_search_mode)]
        mode: SearchMode,
    },

    /// Ask a question, optionally grounded in matching notes
    Ask {
        /// The question to ask
        question: String,

        /// Search query selecting the notes sent as context
        #[arg(long, short)]
        context: Option<String>,

        /// What the context query matches against
        #[arg(long, short, default_value = "metadata", value_parser = parse_search_mode)]
        mode: SearchMode,
    },

    /// Manage settings (API key, endpoint)
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Parse search mode from string
pub fn parse_search_mode(s: &str) -> std::result::Result<SearchMode, String> {
    s.parse::<SearchMode>().map_err(|e| e.to_string())
}
