// src/generators/password.rs
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 1024;

pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length must be at least 4.")]
    LengthTooShort(usize),

    #[error("Password length must be at most 1024.")]
    LengthTooLong(usize),

    #[error("Every {0} character is excluded, but the password needs at least one.")]
    RequiredClassExcluded(&'static str),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password_with_rng(options, &mut rand::thread_rng())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the sampling pool: punctuation, letters, digits and the extra
/// characters, minus exclusions. Duplicates are dropped so an included
/// character is not weighted twice.
pub fn build_pool(include_chars: &str, exclude_chars: &str) -> Vec<char> {
    let mut pool: Vec<char> = Vec::new();

    for c in PUNCTUATION.chars().chain(LETTERS.chars()).chain(DIGITS.chars()).chain(include_chars.chars()) {
        if !exclude_chars.contains(c) && !pool.contains(&c) {
            pool.push(c);
        }
    }

    pool
}

fn allowed(set: &str, exclude_chars: &str) -> Vec<char> {
    set.chars().filter(|c| !exclude_chars.contains(*c)).collect()
}

// A punctuation character, `length - 2` pool characters, then a digit.
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String> {
    if options.length < MIN_PASSWORD_LENGTH {
        return Err(GenerationError::LengthTooShort(options.length));
    }
    if options.length > MAX_PASSWORD_LENGTH {
        return Err(GenerationError::LengthTooLong(options.length));
    }

    let punctuation = allowed(PUNCTUATION, &options.exclude_chars);
    let digits = allowed(DIGITS, &options.exclude_chars);
    let pool = build_pool(&options.include_chars, &options.exclude_chars);

    let first = *punctuation
        .choose(rng)
        .ok_or(GenerationError::RequiredClassExcluded("punctuation"))?;
    let last = *digits
        .choose(rng)
        .ok_or(GenerationError::RequiredClassExcluded("digit"))?;

    // The pool always holds `first` and `last`, so it is never empty here.
    let mut password = String::with_capacity(options.length);
    password.push(first);
    for _ in 0..options.length - 2 {
        if let Some(c) = pool.choose(rng) {
            password.push(*c);
        }
    }
    password.push(last);

    log::debug!("Generated password of length {}", options.length);
    Ok(password)
}
