//! Path resolution utilities for CLI commands

use std::env;
use std::path::PathBuf;

/// Resolve the vault directory.
///
/// An explicit `--vault` wins; relative paths are taken from the current
/// directory. Without one, the current directory is the vault, or "." if
/// that cannot be determined.
pub fn resolve_vault_path(vault: Option<PathBuf>) -> PathBuf {
    let current = || env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match vault {
        Some(path) if path.is_absolute() => path,
        Some(path) => current().join(path),
        None => current(),
    }
}
