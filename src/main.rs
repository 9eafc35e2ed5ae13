//! branch-diff - compare the binary packages of two distribution branches
//!
//! Fetches the package lists of a stable and a development branch, then
//! reports per architecture which packages exist in only one of them and
//! which have a newer RPM version in the development branch.

use clap::Parser;
use miette::Diagnostic;

mod cache;
mod cli;
mod commands;
mod config;
mod diff;
mod domain;
mod error;
mod fetch;
mod logging;
mod progress;
mod report;
mod version;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::diff::run(&cli) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
