//! Interactive and scripted shell over the user store.

pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, SCRIPT_MODE_VAR};
