//! CLI commands for vaultchat

pub mod ask;
pub mod config;
pub mod dispatch;
pub mod search;
