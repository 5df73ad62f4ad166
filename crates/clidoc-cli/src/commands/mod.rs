//! CLI command handlers.

pub mod catalog;
pub mod check;
pub mod verify_json;
