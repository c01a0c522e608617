//! CLI interface for libmetaphone3
//!
//! Encodes words from the command line, converts word lists to CSV keys and
//! checks the encoder against conformance files.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};
