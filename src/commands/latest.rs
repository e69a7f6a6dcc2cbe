//! Latest command implementation

use console::Style;

use crate::cli::LatestArgs;
use crate::commands::helpers::Project;
use crate::error::Result;
use crate::latest;

/// Run latest command
pub fn run(project: &Project, args: LatestArgs) -> Result<()> {
    let docs_dir = args
        .docs_dir
        .unwrap_or_else(|| project.config.docs_dir.clone());

    println!("Creating 'latest' folders in {}", project.display(&docs_dir));
    let copies = latest::create_latest_folders(&docs_dir)?;

    if copies.is_empty() {
        println!("No versioned modules found.");
        return Ok(());
    }

    for copy in &copies {
        println!(
            "  {} {}/{} -> {} ({})",
            Style::new().green().apply_to("✓"),
            copy.category,
            copy.module,
            project.display(&copy.destination),
            copy.version
        );
    }
    Ok(())
}
