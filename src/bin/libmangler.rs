//! libmangler - render identifier names in any casing convention.

use std::process;

use clap::Parser;
use colored::Colorize;

use libmangler::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::execute(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
