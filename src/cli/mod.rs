//! Command-line interface for envaudit.
//!
//! This module provides the CLI argument parsing using clap's derive macros.
//! The audit itself takes no inputs; the flags only affect presentation.

pub mod args;

pub use args::Cli;
