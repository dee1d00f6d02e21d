//! Terminal host for the contact form.

mod commands;
pub mod output;
pub mod render;
mod shell;

pub use commands::{CliMode, ShellContext};
pub use shell::run_cli;
