// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod display;
pub mod handlers;
pub mod input;
pub mod menu;

pub use commands::CliCommand;

/// Generate random passwords and score how strong they are.
///
/// Without a subcommand, asks for length and character sets interactively
/// and opens the result view.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
