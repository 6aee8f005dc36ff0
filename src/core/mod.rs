// src/core/mod.rs
pub mod config;
pub mod state;

pub use state::AppState;
