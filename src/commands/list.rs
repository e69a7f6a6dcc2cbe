//! List command implementation
//!
//! This command shows what the index page would contain: every bucket with
//! its ontologies and their versions, in index order.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::Project;
use crate::error::Result;
use crate::index::{self, IndexData};

/// Run list command
pub fn run(project: &Project, args: ListArgs) -> Result<()> {
    let data = index::build_index_data(&project.config.ontology_dir, &project.config.categories)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    display_index(project, &data);
    Ok(())
}

fn display_index(project: &Project, data: &IndexData) {
    if data.total_sets() == 0 {
        println!(
            "No ontologies found in {}.",
            project.display(&project.config.ontology_dir)
        );
        return;
    }

    println!("Ontologies ({}):", data.total_sets());
    for (bucket, sets) in data.buckets() {
        if sets.is_empty() {
            continue;
        }
        println!();
        println!("  {}", Style::new().bold().apply_to(bucket));
        for set in sets {
            println!(
                "    {} {}",
                Style::new().bold().yellow().apply_to(&set.name),
                Style::new().dim().apply_to(set.versions.join(", "))
            );
        }
    }
}
