//! Index command implementation
//!
//! Renders the landing page from the `.ttl` sources. Unlike the index step of
//! `ontodoc build`, every failure here is fatal.

use console::Style;

use crate::cli::IndexArgs;
use crate::commands::helpers::Project;
use crate::error::Result;
use crate::index;

/// Run index command
pub fn run(project: &Project, args: IndexArgs) -> Result<()> {
    let mut config = project.config.clone();
    if let Some(template) = args.template {
        config.template = template;
    }
    let output = args.output.unwrap_or_else(|| config.index_output.clone());

    println!("Generating index file");
    let data = index::create_index_file(&config, &output)?;

    println!(
        "{} Index file generated: {} ({} ontologies)",
        Style::new().green().apply_to("✓"),
        project.display(&output),
        data.total_sets()
    );
    Ok(())
}
