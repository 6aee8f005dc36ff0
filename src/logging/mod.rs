// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use chrono::Local;
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

const MAX_LOG_SIZE: u64 = 1024 * 1024; // Rotate once the file passes 1 MiB
const MAX_ROTATED_FILES: usize = 3;    // Rotated files kept next to the live one

/// Route the `log` facade to `log_file`, rotating it first if it grew too large.
pub fn init(log_file: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    rotate_if_needed(log_file, MAX_LOG_SIZE, MAX_ROTATED_FILES)?;

    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}

// Rename `log_file` with a timestamp suffix once it exceeds `max_size`
pub fn rotate_if_needed(log_file: &Path, max_size: u64, keep: usize) -> Result<Option<PathBuf>> {
    let size = match fs::metadata(log_file) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if size <= max_size {
        return Ok(None);
    }

    let stem = log_file.file_stem().and_then(|s| s.to_str()).unwrap_or("passgen");
    let timestamp = Local::now().format("%Y%m%d%H%M%S%3f");
    let rotated = log_file.with_file_name(format!("{}-{}.log", stem, timestamp));

    fs::rename(log_file, &rotated)?;
    File::create(log_file)?;

    cleanup_old_logs(log_file, keep)?;

    Ok(Some(rotated))
}

// Keep only the `keep` newest rotated files
fn cleanup_old_logs(log_file: &Path, keep: usize) -> Result<()> {
    let dir = match log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = log_file.file_stem().and_then(|s| s.to_str()).unwrap_or("passgen");

    let mut rotated = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        let is_rotated = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| is_rotated_name(n, stem));
        if is_rotated {
            rotated.push(path);
        }
    }

    // Timestamp suffixes sort chronologically; newest first
    rotated.sort();
    rotated.reverse();

    for path in rotated.iter().skip(keep) {
        fs::remove_file(path)?;
    }

    Ok(())
}

// `<stem>-<17-digit timestamp>.log`, exactly as `rotate_if_needed` names them
fn is_rotated_name(name: &str, stem: &str) -> bool {
    name.strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|rest| rest.strip_suffix(".log"))
        .map_or(false, |stamp| stamp.len() == 17 && stamp.bytes().all(|b| b.is_ascii_digit()))
}
