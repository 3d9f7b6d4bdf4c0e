//! Config command argument structures

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Store the API key
    SetKey {
        /// API key (get one at https://kagi.com/settings/api)
        key: String,
    },
    /// Remove the stored API key
    ClearKey,
    /// Show the effective settings (key redacted)
    Show,
    /// Print the settings file location
    Path,
}
