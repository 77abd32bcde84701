//! Command-line interface
//!
//! Argument parsing for the `b58check` binary.

pub mod commands;

pub use commands::{Command, Opt};
