// src/core/state.rs
use crate::generators::{password::Result, PasswordGenerator};
use crate::models::{PasswordGenerationOptions, PasswordReport};
use crate::strength;
use crate::utils::mask_password;

/// State behind the result view: the options that produced the current
/// password, its report, and whether it is currently masked.
pub struct AppState {
    generator: PasswordGenerator,
    options: PasswordGenerationOptions,
    report: PasswordReport,
    masked: bool,
}

impl AppState {
    pub fn new(options: PasswordGenerationOptions, start_masked: bool) -> Result<Self> {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&options)?;

        Ok(Self {
            generator,
            options,
            report: strength::analyze(&password),
            masked: start_masked,
        })
    }

    // Fresh password from the same options; visibility is left alone
    pub fn regenerate(&mut self) -> Result<&PasswordReport> {
        let password = self.generator.generate_password(&self.options)?;
        self.report = strength::analyze(&password);
        log::info!("Regenerated password ({} characters, {})", self.report.length, self.report.strength);
        Ok(&self.report)
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.masked = !self.masked;
        self.masked
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn password(&self) -> &str {
        &self.report.password
    }

    pub fn displayed_password(&self) -> String {
        if self.masked {
            mask_password(&self.report.password)
        } else {
            self.report.password.clone()
        }
    }

    pub fn report(&self) -> &PasswordReport {
        &self.report
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }
}
