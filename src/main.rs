use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;
mod system;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config.log_file, config.log_level) {
        eprintln!("⚠️ File logging disabled ({}): {}", config.log_file.display(), e);
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    log::info!("🔐 Starting password generator");
    log::debug!("Command line args: {:?}", args.command.as_ref().map(command_name));

    // Prompts catch Ctrl+C themselves; this covers everything between them
    if let Err(e) = ctrlc::set_handler(|| {
        log::info!("🔴 Ctrl+C received. Shutting down...");
        println!("\n👋 Goodbye!");
        std::process::exit(0);
    }) {
        log::warn!("Failed to set Ctrl+C handler: {}", e);
    }

    let result = match args.command {
        None => cli::menu::run_interactive(&config, args.json),
        Some(CliCommand::Generate { length, include, exclude, view }) => {
            cli::handlers::handle_generate(&config, length, include, exclude, view, args.json)
        }
        Some(CliCommand::Analyze { password }) => cli::handlers::handle_analyze(password, args.json),
    };

    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    log::info!("✅ Password generator finished");

    result
}

// Subcommand name only; arguments may carry a password
fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Generate { .. } => "generate",
        CliCommand::Analyze { .. } => "analyze",
    }
}
