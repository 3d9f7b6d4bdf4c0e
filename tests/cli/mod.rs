pub mod ask;
pub mod search;
pub mod support;
