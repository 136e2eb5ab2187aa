// Statefile - YAML-backed key/value state for container tooling
// A small persistence layer plus CLI for recording values between runs

pub mod cli;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use state::{StateError, StateFile};
