// src/cli/handlers.rs
use anyhow::Context;
use inquire::Password;

use crate::cli::display::render_report;
use crate::cli::menu::run_result_view;
use crate::core::config::Config;
use crate::core::AppState;
use crate::models::{PasswordGenerationOptions, PasswordReport};
use crate::strength;

// Handlers for the non-interactive subcommands

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    include: Option<String>,
    exclude: Option<String>,
    view: bool,
    json: bool,
) -> anyhow::Result<()> {
    let options = PasswordGenerationOptions {
        length: length.unwrap_or(config.default_password_length),
        include_chars: include.unwrap_or_else(|| config.default_include_chars.clone()),
        exclude_chars: exclude.unwrap_or_else(|| config.default_exclude_chars.clone()),
    };

    let mut state = AppState::new(options, config.start_masked)?;
    log::info!(
        "Generated password ({} characters, {})",
        state.report().length,
        state.report().strength
    );

    if view {
        return run_result_view(&mut state);
    }

    // Masking only applies to the result view; a one-shot print always shows it
    print_report(state.report(), state.password(), json)
}

pub fn handle_analyze(password: Option<String>, json: bool) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    let report = strength::analyze(&password);
    log::info!("Analyzed password ({} characters, {})", report.length, report.strength);

    print_report(&report, &password, json)
}

pub fn print_report(report: &PasswordReport, shown: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        print!("{}", render_report(report, shown));
    }
    Ok(())
}
