// src/cli/input.rs
use inquire::{InquireError, Text};
use thiserror::Error;

use crate::core::config::Config;
use crate::generators::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::PasswordGenerationOptions;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LengthInputError {
    #[error("Invalid input. Please enter an integer.")]
    NotAnInteger,

    #[error("Password length must be at least 4.")]
    TooShort,

    #[error("Password length must be at most 1024.")]
    TooLong,
}

/// Parse the length typed at the prompt. Any integer parses, negative ones
/// included; the bounds are enforced separately by `check_length`.
pub fn parse_length(input: &str) -> Result<i64, LengthInputError> {
    input.trim().parse::<i64>().map_err(|_| LengthInputError::NotAnInteger)
}

pub fn check_length(length: i64) -> Result<usize, LengthInputError> {
    match usize::try_from(length) {
        Ok(length) if length < MIN_PASSWORD_LENGTH => Err(LengthInputError::TooShort),
        Ok(length) if length > MAX_PASSWORD_LENGTH => Err(LengthInputError::TooLong),
        Ok(length) => Ok(length),
        Err(_) => Err(LengthInputError::TooShort),
    }
}

/// Source of answers for the interactive questions.
pub trait LinePrompt {
    fn ask(&mut self, message: &str, default: &str) -> Result<String, InquireError>;
}

pub struct InquirePrompt;

impl LinePrompt for InquirePrompt {
    fn ask(&mut self, message: &str, default: &str) -> Result<String, InquireError> {
        Text::new(message).with_default(default).prompt()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Ready(PasswordGenerationOptions),
    Rejected(LengthInputError),
}

// A non-integer length stops right away; range errors surface after all three questions
pub fn collect_options<P: LinePrompt>(prompt: &mut P, config: &Config) -> Result<PromptOutcome, InquireError> {
    let raw_length = prompt.ask(
        "Enter desired password length (minimum 4):",
        &config.default_password_length.to_string(),
    )?;
    let length = match parse_length(&raw_length) {
        Ok(length) => length,
        Err(e) => return Ok(PromptOutcome::Rejected(e)),
    };

    let include_chars = prompt.ask(
        "Enter characters to include (optional):",
        &config.default_include_chars,
    )?;
    let exclude_chars = prompt.ask(
        "Enter characters to exclude (optional):",
        &config.default_exclude_chars,
    )?;

    Ok(match check_length(length) {
        Ok(length) => PromptOutcome::Ready(PasswordGenerationOptions {
            length,
            include_chars,
            exclude_chars,
        }),
        Err(e) => PromptOutcome::Rejected(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl LinePrompt for Scripted {
        fn ask(&mut self, message: &str, _default: &str) -> Result<String, InquireError> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .map(String::from)
                .ok_or(InquireError::OperationCanceled)
        }
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length("  8\n"), Ok(8));
        assert_eq!(parse_length("-3"), Ok(-3));
        assert_eq!(parse_length("twelve"), Err(LengthInputError::NotAnInteger));
        assert_eq!(parse_length("12.5"), Err(LengthInputError::NotAnInteger));
        assert_eq!(parse_length(""), Err(LengthInputError::NotAnInteger));
    }

    #[test]
    fn test_check_length() {
        assert_eq!(check_length(4), Ok(4));
        assert_eq!(check_length(64), Ok(64));
        assert_eq!(check_length(1024), Ok(1024));
        assert_eq!(check_length(3), Err(LengthInputError::TooShort));
        assert_eq!(check_length(-1), Err(LengthInputError::TooShort));
        assert_eq!(check_length(1025), Err(LengthInputError::TooLong));
        assert_eq!(check_length(i64::MAX), Err(LengthInputError::TooLong));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LengthInputError::NotAnInteger.to_string(),
            "Invalid input. Please enter an integer."
        );
        assert_eq!(
            LengthInputError::TooShort.to_string(),
            "Password length must be at least 4."
        );
    }

    #[test]
    fn test_valid_answers_become_options() {
        let mut prompt = Scripted::new(&["20", "éü", "O0"]);
        let outcome = collect_options(&mut prompt, &Config::default()).unwrap();
        assert_eq!(
            outcome,
            PromptOutcome::Ready(PasswordGenerationOptions {
                length: 20,
                include_chars: "éü".to_string(),
                exclude_chars: "O0".to_string(),
            })
        );
        assert_eq!(prompt.asked.len(), 3);
    }

    #[test]
    fn test_non_integer_stops_after_first_question() {
        let mut prompt = Scripted::new(&["ten", "abc", "xyz"]);
        let outcome = collect_options(&mut prompt, &Config::default()).unwrap();
        assert_eq!(outcome, PromptOutcome::Rejected(LengthInputError::NotAnInteger));
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn test_short_length_rejected_after_all_questions() {
        let mut prompt = Scripted::new(&["3", "", ""]);
        let outcome = collect_options(&mut prompt, &Config::default()).unwrap();
        assert_eq!(outcome, PromptOutcome::Rejected(LengthInputError::TooShort));
        assert_eq!(prompt.asked.len(), 3);
        assert!(prompt.asked[2].contains("exclude"));
    }

    #[test]
    fn test_huge_length_is_rejected_not_generated() {
        let mut prompt = Scripted::new(&["4611686018427387904", "", ""]);
        let outcome = collect_options(&mut prompt, &Config::default()).unwrap();
        assert_eq!(outcome, PromptOutcome::Rejected(LengthInputError::TooLong));
    }

    #[test]
    fn test_cancelled_prompt_is_an_error() {
        let mut prompt = Scripted::new(&["12"]);
        let err = collect_options(&mut prompt, &Config::default()).unwrap_err();
        assert!(matches!(err, InquireError::OperationCanceled));
    }
}
