//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// ontodoc - ontology documentation builder
///
/// Build the landing page and WIDOCO documentation for versioned ontology modules.
#[derive(Parser, Debug)]
#[command(
    name = "ontodoc",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Index page and WIDOCO documentation builder for versioned ontologies",
    long_about = "ontodoc scans ontology/{modules,demo}/<name>/<version>/ for ontology files, \
                  renders a categorized landing page from a Handlebars template and, for local \
                  builds, runs WIDOCO per file and maintains a 'latest' copy of every module.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ontodoc index\n    \
                  ontodoc index public/index.html\n    \
                  ontodoc build\n    \
                  ontodoc latest docs/dev\n    \
                  ontodoc list --json"
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "ONTODOC_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/ontodoc.yaml when present)
    #[arg(long, short = 'c', global = true, env = "ONTODOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the index page from the ontology sources
    Index(IndexArgs),

    /// Generate WIDOCO documentation, latest folders and the index page locally
    Build(BuildArgs),

    /// Refresh the 'latest' folder of every generated module
    Latest(LatestArgs),

    /// List discovered ontologies by category
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the index command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Write the default index (docs/index.html):\n    ontodoc index\n\n\
                   Write to another file:\n    ontodoc index public/index.html\n\n\
                   Use another template:\n    ontodoc index --template site/index.hbs")]
pub struct IndexArgs {
    /// Output file (defaults to docs/index.html)
    pub output: Option<PathBuf>,

    /// Handlebars template (defaults to index.hbs)
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build documentation into docs/dev:\n    ontodoc build\n\n\
                  Use a different WIDOCO jar:\n    ontodoc build --jar /opt/widoco/widoco.jar")]
pub struct BuildArgs {
    /// WIDOCO jar (defaults to tools/widoco-1.4.25.jar)
    #[arg(long)]
    pub jar: Option<PathBuf>,

    /// Per-file timeout in seconds (defaults to 300)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the latest command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Refresh latest folders under docs/dev:\n    ontodoc latest\n\n\
                  Refresh a published tree:\n    ontodoc latest docs")]
pub struct LatestArgs {
    /// Generated documentation directory (defaults to docs/dev)
    pub docs_dir: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List ontologies by category:\n    ontodoc list\n\n\
                  Print the index data as JSON:\n    ontodoc list --json")]
pub struct ListArgs {
    /// Print the index data as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ontodoc completions --shell bash > ~/.bash_completion.d/ontodoc\n\n\
                  Generate zsh completions:\n    ontodoc completions --shell zsh > ~/.zfunc/_ontodoc")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}
