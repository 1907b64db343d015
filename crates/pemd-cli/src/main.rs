//! PEMD Diagnostic - material mass estimation
//!
//! A CLI tool that turns material volumes into masses and exports a CSV report.

mod batch;
mod cli;
mod commands;
mod output;
mod shell;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
