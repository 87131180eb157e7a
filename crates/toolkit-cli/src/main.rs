//! `toolkit-tools-gen`: generates tool schema definitions from annotated
//! Rust sources.
//!
//! # Examples
//!
//! ```bash
//! # Generate next to every marked tool under src/tools
//! toolkit-tools-gen --path src/tools
//!
//! # Check what would be generated, as JSON
//! toolkit-tools-gen -p src/tools,src/extra --dry-run --format json
//!
//! # Use a config file and fail on any bad annotation
//! toolkit-tools-gen --config toolkit-gen.toml --strict
//! ```

use clap::Parser;
use colored::Colorize;
use toolkit_cli::Cli;
use toolkit_cli::runner::{exit_code_for, init_logging, run};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.log_format) {
        eprintln!("{} {err:#}", "error:".red().bold());
    }

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}
