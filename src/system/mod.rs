// src/system/mod.rs
pub mod clipboard;

pub use clipboard::copy_to_clipboard;
