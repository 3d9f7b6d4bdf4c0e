//! Vaultchat Core Library
//!
//! Search a markdown vault, assemble the matching notes into a context blob,
//! and ask a remote question-answering endpoint about them.

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod qa;
pub mod search;
pub mod session;
pub mod vault;
