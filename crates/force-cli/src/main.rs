//! Mixed Force Validator - handicap-weighted tonnage cap check
//!
//! A CLI tool that checks whether a Clan / Inner Sphere force fits under a
//! base tonnage limit.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;
use force_types::Error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        match e {
            Error::InvalidNumber(_) => eprintln!("\n[ERROR] {}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
