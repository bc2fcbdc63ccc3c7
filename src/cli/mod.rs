//! CLI interface for ru-soundex
//!
//! Encodes words and measures phonetic distance from the command line.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
