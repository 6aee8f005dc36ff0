// src/cli/menu.rs
use inquire::{InquireError, Select};

use crate::cli::display::render_report;
use crate::cli::handlers::print_report;
use crate::cli::input::{collect_options, InquirePrompt, PromptOutcome};
use crate::core::config::Config;
use crate::core::AppState;
use crate::system::copy_to_clipboard;

const COPY: &str = "📋  Copy to clipboard";
const REGENERATE: &str = "🔁  Regenerate password";
const TOGGLE: &str = "👁️  Show/Hide password";
const EXIT: &str = "❌  Exit";

pub fn run_interactive(config: &Config, json: bool) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🦀 RUST PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    // Bad input is reported and ends the run; it is not an error exit
    let options = match collect_options(&mut InquirePrompt, config) {
        Ok(PromptOutcome::Ready(options)) => options,
        Ok(PromptOutcome::Rejected(e)) => {
            println!("{}", e);
            return Ok(());
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            println!("👋 Goodbye!");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut state = match AppState::new(options, config.start_masked) {
        Ok(state) => state,
        Err(e) => {
            println!("❌ {}", e);
            return Ok(());
        }
    };
    log::info!(
        "Generated password ({} characters, {})",
        state.report().length,
        state.report().strength
    );

    if json {
        return print_report(state.report(), state.password(), true);
    }

    run_result_view(&mut state)
}

/// Show the current password and its report until the user exits:
/// copy, regenerate with the same options, or toggle masking.
pub fn run_result_view(state: &mut AppState) -> anyhow::Result<()> {
    let mut render = true;
    log::debug!("Opening result view for {}-character passwords", state.options().length);

    loop {
        if render {
            println!();
            print!("{}", render_report(state.report(), &state.displayed_password()));
            println!();
        }
        render = true;

        let choice = match Select::new("What next?", vec![COPY, REGENERATE, TOGGLE, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            COPY => {
                match copy_to_clipboard(state.password()) {
                    Ok(_) => println!("✅ Password copied to clipboard!"),
                    Err(e) => {
                        log::warn!("Clipboard copy failed: {}", e);
                        println!("❌ Could not copy password: {}", e);
                    }
                }
                render = false;
            }
            REGENERATE => {
                state.regenerate()?;
            }
            TOGGLE => {
                state.toggle_visibility();
                log::debug!("Password {}", if state.is_masked() { "hidden" } else { "shown" });
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
