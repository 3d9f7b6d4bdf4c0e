//! Error types and exit codes for vaultchat
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (network, malformed response, IO)
//! - 2: Usage error (empty query or question, overlapping ask)
//! - 3: Data/configuration error (missing API key, missing vault, unreadable note)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - empty input, busy session (2)
    Usage = 2,
    /// Data/configuration error - missing key, vault or note content (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while searching notes or asking questions
#[derive(Error, Debug)]
pub enum VaultChatError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    Validation(String),

    #[error("another question is still being answered")]
    Busy,

    // Data/configuration errors (exit code 3)
    #[error("{0}")]
    Configuration(String),

    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("failed to read note {note}: {reason}")]
    ContentRetrieval { note: String, reason: String },

    // Generic failures (exit code 1)
    #[error("{0}")]
    Network(String),

    #[error("unexpected response from API: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl VaultChatError {
    /// Create a validation error for an empty or invalid user input
    pub fn validation(message: impl Into<String>) -> Self {
        VaultChatError::Validation(message.into())
    }

    /// Create the error raised when no API key is configured
    pub fn missing_api_key() -> Self {
        VaultChatError::Configuration(
            "API key not configured. Set it with `vaultchat config set-key <KEY>`.".to_string(),
        )
    }

    /// Create an error for a note whose content could not be read
    pub fn content_retrieval(note: impl std::fmt::Display, error: impl std::fmt::Display) -> Self {
        VaultChatError::ContentRetrieval {
            note: note.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed call to the remote endpoint
    pub fn network(error: impl std::fmt::Display) -> Self {
        VaultChatError::Network(format!("Failed to connect to API: {}", error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VaultChatError::Validation(_) | VaultChatError::Busy => ExitCode::Usage,

            VaultChatError::Configuration(_)
            | VaultChatError::VaultNotFound { .. }
            | VaultChatError::ContentRetrieval { .. } => ExitCode::Data,

            VaultChatError::Network(_)
            | VaultChatError::MalformedResponse(_)
            | VaultChatError::Io(_)
            | VaultChatError::Json(_)
            | VaultChatError::Toml(_)
            | VaultChatError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            VaultChatError::Validation(_) => "validation_error",
            VaultChatError::Busy => "busy",
            VaultChatError::Configuration(_) => "configuration_error",
            VaultChatError::VaultNotFound { .. } => "vault_not_found",
            VaultChatError::ContentRetrieval { .. } => "content_retrieval_error",
            VaultChatError::Network(_) => "network_error",
            VaultChatError::MalformedResponse(_) => "malformed_response",
            VaultChatError::Io(_) => "io_error",
            VaultChatError::Json(_) => "json_error",
            VaultChatError::Toml(_) => "toml_error",
            VaultChatError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for vaultchat operations
pub type Result<T> = std::result::Result<T, VaultChatError>;
