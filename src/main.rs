//! keywords - word frequency extraction for directory trees
//!
//! keywords provides:
//! - Recursive scanning with binary file detection
//! - Unicode-aware normalization with hyphen/underscore gluing
//! - Stopword and minimum length filtering
//! - Deterministic top-N ranking (jsonl/json/md/raw output)

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;
mod words;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    cli::init_logging(&cli);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
