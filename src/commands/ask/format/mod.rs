//! Ask command output formatting modules

pub mod human;
pub mod json;

pub use human::output_human;
pub use json::output_json;
