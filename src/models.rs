// src/models.rs
use chrono::NaiveDate;
use serde::Serialize;

use crate::strength::Strength;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_chars: String,
    pub exclude_chars: String,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_chars: String::new(),
            exclude_chars: String::new(),
        }
    }
}

/// Everything the result view and `--json` output show about one password.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    pub password: String,
    pub length: usize,
    pub strength: Strength,
    pub color: String,
    pub entropy_bits: f64,
    pub diversity_score: u8,
    pub readability: u8,
    pub expiry_days: u32,
    pub expiry_message: String,
    pub change_by: NaiveDate,
    pub pattern_check: String,
}
