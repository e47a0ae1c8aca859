//! CLI interface for libmangler
//!
//! Renders names in any casing convention from arguments or stdin.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::mangler::{NameMangler, NameManglerBuilder};

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "libmangler")]
#[command(about = "Initialism-aware identifier name mangling")]
#[command(version)]
pub struct Cli {
    /// Extra initialisms to register before converting
    #[arg(short = 'i', long = "initialism", global = true)]
    pub initialisms: Vec<String>,

    /// Extra invariant-plural initialisms to register
    #[arg(long = "invariant", global = true)]
    pub invariants: Vec<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render names in one convention
    Render {
        /// Target convention
        #[arg(short, long, default_value = "go")]
        convention: Convention,

        /// Names to convert; read from stdin when omitted
        names: Vec<String>,
    },

    /// Render names in every convention
    All {
        /// Names to convert; read from stdin when omitted
        names: Vec<String>,
    },

    /// List the registered initialisms in matching order
    Initialisms,
}

/// Output convention selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Convention {
    /// Exported Go identifier
    Go,
    /// Unexported Go identifier
    Var,
    /// snake_case file name
    File,
    /// kebab-case command name
    Command,
    /// lowercase human label
    HumanLower,
    /// Title Case human label
    HumanTitle,
    /// lowerCamelCase JSON property name
    Json,
    /// First rune uppercased, rest lowercased
    Camelize,
}

impl Convention {
    fn render(self, mangler: &NameMangler, name: &str) -> String {
        match self {
            Convention::Go => mangler.to_go_name(name),
            Convention::Var => mangler.to_var_name(name),
            Convention::File => mangler.to_file_name(name),
            Convention::Command => mangler.to_command_name(name),
            Convention::HumanLower => mangler.to_human_name_lower(name),
            Convention::HumanTitle => mangler.to_human_name_title(name),
            Convention::Json => mangler.to_json_name(name),
            Convention::Camelize => mangler.camelize(name),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Convention::Go => "go",
            Convention::Var => "var",
            Convention::File => "file",
            Convention::Command => "command",
            Convention::HumanLower => "human-lower",
            Convention::HumanTitle => "human-title",
            Convention::Json => "json",
            Convention::Camelize => "camelize",
        }
    }
}

const ALL_CONVENTIONS: [Convention; 8] = [
    Convention::Go,
    Convention::Var,
    Convention::File,
    Convention::Command,
    Convention::HumanLower,
    Convention::HumanTitle,
    Convention::Json,
    Convention::Camelize,
];

/// Execute a CLI invocation.
pub fn execute(cli: Cli) -> Result<()> {
    let mangler = NameManglerBuilder::new()
        .additional_initialisms(cli.initialisms)
        .invariant_initialisms(cli.invariants)
        .build();

    match cli.command {
        Commands::Render { convention, names } => {
            for name in collect_names(names)? {
                println!("{}", convention.render(&mangler, &name));
            }
        }
        Commands::All { names } => {
            for name in collect_names(names)? {
                println!("{}", name.bold());
                for convention in ALL_CONVENTIONS {
                    println!(
                        "  {:<12} {}",
                        convention.label().cyan(),
                        convention.render(&mangler, &name)
                    );
                }
            }
        }
        Commands::Initialisms => {
            for word in mangler.initialisms() {
                println!("{word}");
            }
        }
    }

    Ok(())
}

/// Use the provided names, or read one per line from stdin.
fn collect_names(names: Vec<String>) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names);
    }
    let stdin = std::io::stdin();
    stdin
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("reading names from stdin")
}
