//! CLI argument parsing and command dispatch

pub mod args;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
