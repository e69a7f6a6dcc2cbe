//! ontodoc - ontology documentation builder
//!
//! Scans versioned ontology sources, renders a categorized landing page and
//! drives WIDOCO for local documentation builds.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod index;
mod latest;
mod logging;
mod operations;
mod path_utils;
mod progress;
mod scanner;
mod widoco;

use cli::{Cli, Commands};
use commands::helpers::Project;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let load = || Project::load(cli.root.clone(), cli.config.as_deref());

    match cli.command {
        Commands::Index(args) => commands::index::run(&load()?, args),
        Commands::Build(args) => commands::build::run(&load()?, args),
        Commands::Latest(args) => commands::latest::run(&load()?, args),
        Commands::List(args) => commands::list::run(&load()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
