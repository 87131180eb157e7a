//! Command-line front end for `toolkit-codegen`.
//!
//! Exposes the argument parser, run logic and report formatters so they
//! can be tested without spawning the binary.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, ExitCode, LogFormat, OutputFormat};
