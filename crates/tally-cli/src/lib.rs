//! CLI library components for the tally tools.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

pub use commands::{RunOptions, Tool, ToolResult, run_cli, run_tool};
