// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_chars: String,
    pub default_exclude_chars: String,

    // Result View
    pub start_masked: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    // Problems found while reading the environment, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_chars: String::new(),
            default_exclude_chars: String::new(),

            // Result View
            start_masked: false,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/passgen.log"),

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut defaults = Config::default();

        // Log next to the app config when the platform has a config dir
        if let Some(dir) = crate::utils::get_app_config_dir() {
            defaults.log_file = dir.join("passgen.log");
        }

        Self::from_lookup(defaults, |key| env::var(key).ok())
    }

    // Apply overrides from any key/value source on top of `config`
    pub fn from_lookup<F>(mut config: Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length
                }
                _ => config.warnings.push(format!(
                    "Ignoring DEFAULT_PASSWORD_LENGTH '{}': expected an integer from {} to {}",
                    val, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                )),
            }
        }

        if let Some(chars) = lookup("DEFAULT_INCLUDE_CHARS") {
            config.default_include_chars = chars;
        }

        if let Some(chars) = lookup("DEFAULT_EXCLUDE_CHARS") {
            config.default_exclude_chars = chars;
        }

        // Result View
        if let Some(val) = lookup("START_MASKED") {
            match val.trim().to_lowercase().parse() {
                Ok(masked) => config.start_masked = masked,
                Err(_) => config.warnings.push(format!(
                    "Ignoring START_MASKED '{}': expected true or false",
                    val
                )),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.warnings.push(format!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(Config::default(), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = from_pairs(&[]);
        assert_eq!(config.default_password_length, 16);
        assert!(config.default_include_chars.is_empty());
        assert!(!config.start_masked);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = from_pairs(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_CHARS", "éü"),
            ("DEFAULT_EXCLUDE_CHARS", "O0l1"),
            ("START_MASKED", "TRUE"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FILE", "/tmp/passgen-test.log"),
        ]);
        assert_eq!(config.default_password_length, 24);
        assert_eq!(config.default_include_chars, "éü");
        assert_eq!(config.default_exclude_chars, "O0l1");
        assert!(config.start_masked);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/passgen-test.log"));
    }

    #[test]
    fn test_bad_values_keep_defaults_and_warn() {
        let config = from_pairs(&[
            ("DEFAULT_PASSWORD_LENGTH", "2"),
            ("START_MASKED", "maybe"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert!(!config.start_masked);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.warnings.len(), 3);
    }

    #[test]
    fn test_default_length_above_maximum_is_ignored() {
        let config = from_pairs(&[("DEFAULT_PASSWORD_LENGTH", "18446744073709551615")]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.warnings.len(), 1);

        let config = from_pairs(&[("DEFAULT_PASSWORD_LENGTH", "1024")]);
        assert_eq!(config.default_password_length, 1024);
        assert!(config.warnings.is_empty());
    }
}
